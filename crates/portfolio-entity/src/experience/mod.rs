//! Work experience entities.

pub mod model;

pub use model::{Company, ExperienceCreated, ExperienceIn, ExperienceOut};
