//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod experience;
pub mod myinfo;
pub mod project;
pub mod root;
pub mod skill;
