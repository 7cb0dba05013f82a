//! Skill entities.

pub mod model;

pub use model::{SkillIn, SkillOut, SkillPatch};
