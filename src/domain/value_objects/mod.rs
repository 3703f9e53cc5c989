//! Value objects - Immutable objects defined by their attributes

mod attributes;
mod check;
mod classes;
mod skills;

pub use attributes::{AdjustOutcome, Attribute, AttributeModifiers, AttributeScores};
pub use check::{resolve, CheckResult, RollOutcome};
pub use classes::{default_class_profiles, evaluate_classes, ClassProfile};
pub use skills::{skill_definition, SkillDefinition, SkillPoints, SkillTotals, SKILLS};
