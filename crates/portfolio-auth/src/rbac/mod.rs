//! Role-based access control.

pub mod enforcer;
pub mod permission;

pub use enforcer::{RbacEnforcer, bearer_token};
pub use permission::PermissionSet;
