//! Skill check resolution primitives
//!
//! A check succeeds when `roll + total skill >= DC`. The draw itself lives in
//! the application layer ([`CheckResolver`](crate::application::services::CheckResolver));
//! this module holds the pure comparison and the outcome types.

use serde::{Deserialize, Serialize};

/// Success or failure of a skill check against a DC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckResult {
    Success,
    Failure,
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

/// One resolved roll. Ephemeral, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    /// The raw die value, in 1..=20.
    pub roll: i32,
    pub result: CheckResult,
}

/// Pure resolution: success iff `roll + total_skill >= dc`.
pub fn resolve(roll: i32, total_skill: i32, dc: i32) -> CheckResult {
    if roll + total_skill >= dc {
        CheckResult::Success
    } else {
        CheckResult::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_boundary() {
        // total 5 against DC 15: a 10 just makes it, a 9 does not.
        assert_eq!(resolve(10, 5, 15), CheckResult::Success);
        assert_eq!(resolve(9, 5, 15), CheckResult::Failure);
    }

    #[test]
    fn test_negative_total_skill() {
        assert_eq!(resolve(20, -2, 19), CheckResult::Failure);
        assert_eq!(resolve(20, -2, 18), CheckResult::Success);
    }
}
