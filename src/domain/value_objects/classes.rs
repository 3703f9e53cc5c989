//! Class profiles and eligibility evaluation
//!
//! A class profile lists minimum attribute scores. Eligibility is a pure
//! function of the current scores; the achieved list on a sheet is derived
//! state, recomputed after every attribute change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Attribute, AttributeScores};

/// A named set of minimum attribute requirements.
///
/// Attributes absent from the profile impose no constraint; an empty profile
/// is trivially satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassProfile {
    pub name: String,
    pub requirements: BTreeMap<Attribute, i32>,
}

impl ClassProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirements: BTreeMap::new(),
        }
    }

    pub fn require(mut self, attribute: Attribute, minimum: i32) -> Self {
        self.requirements.insert(attribute, minimum);
        self
    }

    /// True when every listed requirement is met by the given scores.
    pub fn is_satisfied_by(&self, scores: &AttributeScores) -> bool {
        self.requirements
            .iter()
            .all(|(attribute, minimum)| scores.get(*attribute) >= *minimum)
    }
}

/// Evaluate which classes the given scores qualify for.
///
/// Output follows profile order; each matching class appears exactly once.
pub fn evaluate_classes(scores: &AttributeScores, profiles: &[ClassProfile]) -> Vec<String> {
    profiles
        .iter()
        .filter(|profile| profile.is_satisfied_by(scores))
        .map(|profile| profile.name.clone())
        .collect()
}

/// The stock class list shipped with the sheet.
pub fn default_class_profiles() -> Vec<ClassProfile> {
    vec![
        ClassProfile::new("Barbarian")
            .require(Attribute::Strength, 14)
            .require(Attribute::Dexterity, 9)
            .require(Attribute::Constitution, 9)
            .require(Attribute::Intelligence, 9)
            .require(Attribute::Wisdom, 9)
            .require(Attribute::Charisma, 9),
        ClassProfile::new("Wizard")
            .require(Attribute::Strength, 9)
            .require(Attribute::Dexterity, 9)
            .require(Attribute::Constitution, 9)
            .require(Attribute::Intelligence, 14)
            .require(Attribute::Wisdom, 9)
            .require(Attribute::Charisma, 9),
        ClassProfile::new("Bard")
            .require(Attribute::Strength, 9)
            .require(Attribute::Dexterity, 9)
            .require(Attribute::Constitution, 9)
            .require(Attribute::Intelligence, 9)
            .require(Attribute::Wisdom, 9)
            .require(Attribute::Charisma, 13),
    ]
}
