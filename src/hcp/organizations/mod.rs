//! Organization module

mod api;
mod commands;
mod models;

pub use commands::resolve_organizations;
pub use models::Organization;
