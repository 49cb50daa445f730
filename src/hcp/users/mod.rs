//! Users module - list users, classify them by email domain, resolve usernames

mod api;
mod commands;
mod directory;
mod filter;
mod models;

pub use api::AdminUserFilter;
pub use commands::run_users_command;
pub use directory::UserDirectory;
pub use filter::DomainAllowList;
pub use models::{AdminUser, AdminUserAttributes, User, UserAttributes};
