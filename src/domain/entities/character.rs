//! Character sheet aggregate
//!
//! One character's full state: attribute scores, skill points, the per-sheet
//! skill point budget, and the three derived tables (modifiers, achieved
//! classes, skill totals). Derived state is recomputed after every mutation
//! and is never settable from outside; the cascade is
//! attributes -> modifiers -> classes -> skill totals.
//!
//! The serde field names match the legacy roster document, which also carried
//! the derived tables, so a saved sheet round-trips byte-compatibly.

use serde::{Deserialize, Serialize};

use crate::domain::rules::DEFAULT_SKILL_POINT_BUDGET;
use crate::domain::value_objects::{
    default_class_profiles, evaluate_classes, skill_definition, AdjustOutcome, Attribute,
    AttributeModifiers, AttributeScores, SkillPoints, SkillTotals,
};
use crate::domain::EngineError;

/// The unit of persistence and the unit held in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    #[serde(rename = "attributeVals")]
    attributes: AttributeScores,
    #[serde(rename = "attributeMods")]
    modifiers: AttributeModifiers,
    #[serde(rename = "classesAchieved")]
    achieved_classes: Vec<String>,
    #[serde(rename = "pointsSpendingMax")]
    points_spending_max: i32,
    #[serde(rename = "skillPoints")]
    skill_points: SkillPoints,
    #[serde(rename = "skillTotals")]
    skill_totals: SkillTotals,
}

impl CharacterSheet {
    /// A fresh sheet: attributes at 10, skills at 0, default budget.
    pub fn new() -> Self {
        let attributes = AttributeScores::new();
        let modifiers = attributes.modifiers();
        let achieved_classes = evaluate_classes(&attributes, &default_class_profiles());
        let skill_points = SkillPoints::new();
        let skill_totals = SkillTotals::derive(&skill_points, &modifiers);
        Self {
            attributes,
            modifiers,
            achieved_classes,
            points_spending_max: DEFAULT_SKILL_POINT_BUDGET,
            skill_points,
            skill_totals,
        }
    }

    pub fn attributes(&self) -> &AttributeScores {
        &self.attributes
    }

    pub fn modifiers(&self) -> &AttributeModifiers {
        &self.modifiers
    }

    pub fn achieved_classes(&self) -> &[String] {
        &self.achieved_classes
    }

    pub fn points_spending_max(&self) -> i32 {
        self.points_spending_max
    }

    pub fn skill_points(&self) -> &SkillPoints {
        &self.skill_points
    }

    pub fn skill_totals(&self) -> &SkillTotals {
        &self.skill_totals
    }

    /// Adjust one attribute and cascade the derived tables.
    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i32) -> AdjustOutcome {
        let outcome = self.attributes.adjust(attribute, delta);
        if outcome.is_applied() {
            self.modifiers = self.attributes.modifiers();
            self.achieved_classes = evaluate_classes(&self.attributes, &default_class_profiles());
            // Modifiers shifted, so every dependent skill total shifts too.
            self.skill_totals = SkillTotals::derive(&self.skill_points, &self.modifiers);
        }
        outcome
    }

    /// Adjust invested points for one skill and recompute totals.
    ///
    /// The skill must exist in the static table.
    pub fn adjust_skill(&mut self, skill: &str, delta: i32) -> Result<AdjustOutcome, EngineError> {
        if skill_definition(skill).is_none() {
            return Err(EngineError::UnknownSkill(skill.to_string()));
        }
        let outcome = self
            .skill_points
            .adjust(skill, delta, self.points_spending_max);
        if outcome.is_applied() {
            self.skill_totals = SkillTotals::derive(&self.skill_points, &self.modifiers);
        }
        Ok(outcome)
    }
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new()
    }
}
