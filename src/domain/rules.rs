//! Rule constants - fixed at build time, not runtime-configurable

/// Maximum total points across all attributes.
pub const ATTRIBUTE_POINT_BUDGET: i32 = 70;

/// Every attribute starts at this score.
pub const DEFAULT_ATTRIBUTE_SCORE: i32 = 10;

/// Default per-character skill point budget (`pointsSpendingMax`).
pub const DEFAULT_SKILL_POINT_BUDGET: i32 = 10;

/// Skill checks roll a d20.
pub const CHECK_DIE_SIDES: i32 = 20;
