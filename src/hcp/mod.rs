//! TFE API client module
//!
//! This module provides functionality to read organizations, workspaces,
//! users and teams from the Terraform Enterprise API.

mod client;
pub mod organizations;
pub mod teams;
pub mod traits;
pub mod users;
pub mod workspaces;

use serde::Deserialize;

pub use client::{build_api_base_url, build_auth_headers, TfeClient};
pub use organizations::{resolve_organizations, Organization};
pub use teams::{run_teams_command, Team, TeamUserRef};
pub use traits::{ApiListResponse, PaginatedResponse};
pub use users::{
    run_users_command, AdminUser, AdminUserFilter, DomainAllowList, User, UserDirectory,
};
pub use workspaces::{run_workspaces_command, Workspace, WorkspaceAttributes};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Pagination {
    #[serde(rename = "next-page")]
    pub next_page: Option<u32>,
}

/// Navigation links of a list response
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PageLinks {
    pub next: Option<String>,
}
