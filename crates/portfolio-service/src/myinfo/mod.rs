//! Personal information.

pub mod service;
pub mod suggest;

pub use service::MyInfoService;
