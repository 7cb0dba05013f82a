//! Project entities.

pub mod model;

pub use model::{
    Platform, ProjectCreated, ProjectDocument, ProjectGroup, ProjectIn, ProjectKind, ProjectOut,
    Scale, StackEnd,
};
