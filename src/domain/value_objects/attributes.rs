//! Attribute ledger and modifier derivation
//!
//! Scores live under a shared point budget; modifiers are always derived
//! from scores with the d20 formula `floor((score - 10) / 2)` and are never
//! set directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{ATTRIBUTE_POINT_BUDGET, DEFAULT_ATTRIBUTE_SCORE};

/// The six core attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// All attributes, in presentation order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

/// Result of a bounded ledger adjustment.
///
/// `OverBudget` leaves the ledger untouched; the legacy sheet silently
/// swallowed the rejection, this makes it observable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum AdjustOutcome {
    /// The delta was applied (negative deltas clamp at zero).
    Applied,
    /// A positive delta would exceed the point budget; state unchanged.
    OverBudget,
}

impl AdjustOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Current attribute scores.
///
/// Invariants: every score >= 0, sum of scores <= [`ATTRIBUTE_POINT_BUDGET`].
/// Mutation only through [`AttributeScores::adjust`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeScores(BTreeMap<Attribute, i32>);

impl AttributeScores {
    /// A fresh ledger with every attribute at the default score.
    pub fn new() -> Self {
        Self(
            Attribute::ALL
                .iter()
                .map(|a| (*a, DEFAULT_ATTRIBUTE_SCORE))
                .collect(),
        )
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        self.0.get(&attribute).copied().unwrap_or(0)
    }

    /// Sum of all scores.
    pub fn total(&self) -> i32 {
        self.0.values().sum()
    }

    /// Apply a signed delta to one attribute.
    ///
    /// Increases are rejected when the new total would exceed the budget.
    /// Decreases always apply, clamped at a floor of zero.
    pub fn adjust(&mut self, attribute: Attribute, delta: i32) -> AdjustOutcome {
        if delta >= 0 && self.total() + delta > ATTRIBUTE_POINT_BUDGET {
            return AdjustOutcome::OverBudget;
        }
        let score = self.0.entry(attribute).or_insert(0);
        *score = (*score + delta).max(0);
        AdjustOutcome::Applied
    }

    /// Derive the modifier table for the current scores.
    pub fn modifiers(&self) -> AttributeModifiers {
        AttributeModifiers(
            self.0
                .iter()
                .map(|(a, score)| (*a, modifier_for(*score)))
                .collect(),
        )
    }
}

impl Default for AttributeScores {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived attribute modifiers. Recomputed whenever scores change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeModifiers(BTreeMap<Attribute, i32>);

impl AttributeModifiers {
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.0.get(&attribute).copied().unwrap_or(0)
    }
}

/// d20 modifier formula, rounding toward negative infinity.
///
/// A score of 9 yields -1 (not 0), 7 yields -2.
fn modifier_for(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}
