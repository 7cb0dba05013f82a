//! Integration tests driving the full router in process.

mod helpers;

mod audit_test;
mod auth_test;
mod context_test;
mod experience_test;
mod myinfo_test;
mod projects_test;
mod translation_test;
