//! Skill ledger and derived skill totals
//!
//! Points are invested per skill under a per-character budget
//! (`pointsSpendingMax`); the total for a skill is the invested points plus
//! the modifier of the skill's governing attribute.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AdjustOutcome, Attribute, AttributeModifiers};

/// Static skill table entry: a skill and the attribute that modifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub governing: Attribute,
}

/// The stock skill list shipped with the sheet.
pub const SKILLS: [SkillDefinition; 18] = [
    SkillDefinition { name: "Acrobatics", governing: Attribute::Dexterity },
    SkillDefinition { name: "Animal Handling", governing: Attribute::Wisdom },
    SkillDefinition { name: "Arcana", governing: Attribute::Intelligence },
    SkillDefinition { name: "Athletics", governing: Attribute::Strength },
    SkillDefinition { name: "Deception", governing: Attribute::Charisma },
    SkillDefinition { name: "History", governing: Attribute::Intelligence },
    SkillDefinition { name: "Insight", governing: Attribute::Wisdom },
    SkillDefinition { name: "Intimidation", governing: Attribute::Charisma },
    SkillDefinition { name: "Investigation", governing: Attribute::Intelligence },
    SkillDefinition { name: "Medicine", governing: Attribute::Wisdom },
    SkillDefinition { name: "Nature", governing: Attribute::Intelligence },
    SkillDefinition { name: "Perception", governing: Attribute::Wisdom },
    SkillDefinition { name: "Performance", governing: Attribute::Charisma },
    SkillDefinition { name: "Persuasion", governing: Attribute::Charisma },
    SkillDefinition { name: "Religion", governing: Attribute::Intelligence },
    SkillDefinition { name: "Sleight of Hand", governing: Attribute::Dexterity },
    SkillDefinition { name: "Stealth", governing: Attribute::Dexterity },
    SkillDefinition { name: "Survival", governing: Attribute::Wisdom },
];

/// Look up a skill in the static table by name.
pub fn skill_definition(name: &str) -> Option<&'static SkillDefinition> {
    SKILLS.iter().find(|skill| skill.name == name)
}

/// Points invested per skill.
///
/// Invariants: every value >= 0, sum of values <= the owning character's
/// skill point budget. Mutation only through [`SkillPoints::adjust`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillPoints(BTreeMap<String, i32>);

impl SkillPoints {
    /// A fresh ledger with every skill at zero points.
    pub fn new() -> Self {
        Self(SKILLS.iter().map(|s| (s.name.to_string(), 0)).collect())
    }

    pub fn get(&self, skill: &str) -> i32 {
        self.0.get(skill).copied().unwrap_or(0)
    }

    /// Sum of invested points.
    pub fn total(&self) -> i32 {
        self.0.values().sum()
    }

    /// Apply a signed delta to one skill against the given budget.
    ///
    /// Same policy as the attribute ledger: increases are rejected past the
    /// budget, decreases clamp at zero. The skill name must come from the
    /// static table; callers validate with [`skill_definition`].
    pub fn adjust(&mut self, skill: &str, delta: i32, budget: i32) -> AdjustOutcome {
        if delta >= 0 && self.total() + delta > budget {
            return AdjustOutcome::OverBudget;
        }
        let points = self.0.entry(skill.to_string()).or_insert(0);
        *points = (*points + delta).max(0);
        AdjustOutcome::Applied
    }
}

impl Default for SkillPoints {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived skill totals: points plus governing attribute modifier.
/// Recomputed whenever points or modifiers change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTotals(BTreeMap<String, i32>);

impl SkillTotals {
    /// Derive totals for every skill in the static table.
    pub fn derive(points: &SkillPoints, modifiers: &AttributeModifiers) -> Self {
        Self(
            SKILLS
                .iter()
                .map(|skill| {
                    let total = points.get(skill.name) + modifiers.get(skill.governing);
                    (skill.name.to_string(), total)
                })
                .collect(),
        )
    }

    pub fn get(&self, skill: &str) -> i32 {
        self.0.get(skill).copied().unwrap_or(0)
    }
}
