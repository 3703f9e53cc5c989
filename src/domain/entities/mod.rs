//! Domain entities - Core business objects

mod character;

pub use character::CharacterSheet;
