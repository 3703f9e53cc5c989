//! Check service - draws dice and resolves skill checks
//!
//! Wraps an RNG so tests can inject a seeded one; the comparison itself is
//! the pure [`resolve`] function in the domain layer.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::domain::entities::CharacterSheet;
use crate::domain::rules::CHECK_DIE_SIDES;
use crate::domain::value_objects::{resolve, skill_definition, RollOutcome};
use crate::domain::EngineError;

/// Outcome of a party check: which character rolled, and how it went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyRollOutcome {
    /// Roster index of the best-qualified character.
    pub character_index: usize,
    pub outcome: RollOutcome,
}

/// Rolls skill checks for one character or for the best of the party.
pub struct CheckResolver<R: Rng = ThreadRng> {
    rng: R,
}

impl CheckResolver<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for CheckResolver<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CheckResolver<R> {
    /// Build a resolver around a specific RNG (seeded in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Roll a d20 and compare roll + total skill against the DC.
    pub fn roll_check(&mut self, total_skill: i32, dc: i32) -> RollOutcome {
        let roll = self.rng.gen_range(1..=CHECK_DIE_SIDES);
        RollOutcome {
            roll,
            result: resolve(roll, total_skill, dc),
        }
    }

    /// Roll for the party member with the highest total in the given skill.
    ///
    /// Linear scan; a later character must be strictly better to take over,
    /// so ties keep the earliest. Errors on an empty roster or a skill that
    /// is not in the table.
    pub fn party_roll_check(
        &mut self,
        characters: &[CharacterSheet],
        skill: &str,
        dc: i32,
    ) -> Result<PartyRollOutcome, EngineError> {
        if characters.is_empty() {
            return Err(EngineError::EmptyRoster);
        }
        if skill_definition(skill).is_none() {
            return Err(EngineError::UnknownSkill(skill.to_string()));
        }

        let mut best = 0;
        for (index, sheet) in characters.iter().enumerate().skip(1) {
            if sheet.skill_totals().get(skill) > characters[best].skill_totals().get(skill) {
                best = index;
            }
        }

        let total = characters[best].skill_totals().get(skill);
        Ok(PartyRollOutcome {
            character_index: best,
            outcome: self.roll_check(total, dc),
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::domain::value_objects::CheckResult;

    fn sheet_with_athletics(points: i32) -> CharacterSheet {
        let mut sheet = CharacterSheet::new();
        assert!(sheet.adjust_skill("Athletics", points).unwrap().is_applied());
        sheet
    }

    #[test]
    fn test_roll_stays_on_the_die() {
        let mut resolver = CheckResolver::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..200 {
            let outcome = resolver.roll_check(0, 10);
            assert!((1..=20).contains(&outcome.roll));
            assert_eq!(outcome.result, resolve(outcome.roll, 0, 10));
        }
    }

    #[test]
    fn test_impossible_and_guaranteed_checks() {
        let mut resolver = CheckResolver::with_rng(StdRng::seed_from_u64(7));
        // DC 1 with a non-negative total always succeeds; DC 30 never does.
        for _ in 0..50 {
            assert_eq!(resolver.roll_check(0, 1).result, CheckResult::Success);
            assert_eq!(resolver.roll_check(5, 30).result, CheckResult::Failure);
        }
    }

    #[test]
    fn test_party_check_picks_highest_total() {
        let characters = vec![
            sheet_with_athletics(3),
            sheet_with_athletics(7),
            sheet_with_athletics(5),
        ];
        let mut resolver = CheckResolver::with_rng(StdRng::seed_from_u64(7));
        let outcome = resolver
            .party_roll_check(&characters, "Athletics", 10)
            .unwrap();
        assert_eq!(outcome.character_index, 1);
    }

    #[test]
    fn test_party_check_tie_keeps_earliest() {
        let characters = vec![
            sheet_with_athletics(5),
            sheet_with_athletics(5),
            sheet_with_athletics(2),
        ];
        let mut resolver = CheckResolver::with_rng(StdRng::seed_from_u64(7));
        let outcome = resolver
            .party_roll_check(&characters, "Athletics", 10)
            .unwrap();
        assert_eq!(outcome.character_index, 0);
    }

    #[test]
    fn test_party_check_empty_roster_is_an_error() {
        let mut resolver = CheckResolver::with_rng(StdRng::seed_from_u64(7));
        assert_eq!(
            resolver.party_roll_check(&[], "Athletics", 10),
            Err(EngineError::EmptyRoster)
        );
    }

    #[test]
    fn test_party_check_unknown_skill_is_an_error() {
        let characters = vec![sheet_with_athletics(1)];
        let mut resolver = CheckResolver::with_rng(StdRng::seed_from_u64(7));
        assert_eq!(
            resolver.party_roll_check(&characters, "Juggling", 10),
            Err(EngineError::UnknownSkill("Juggling".to_string()))
        );
    }
}
