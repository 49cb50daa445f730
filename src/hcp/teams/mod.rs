//! Teams module - list teams and flatten them with their members

mod api;
mod commands;
mod models;

pub use commands::run_teams_command;
pub use models::{Team, TeamAttributes, TeamUserRef};
