//! Workspaces module - fetch workspaces and render them as tfe_workspace resources

mod api;
mod commands;
mod models;

pub use commands::{collect_workspaces, run_workspaces_command};
pub use models::{Workspace, WorkspaceAttributes};
