//! Personal information entities.

pub mod model;

pub use model::{EmailAddress, MYINFO_ATTRIBUTES, MyInfoIn, MyInfoOut};
