//! tfe-export - Export Terraform Enterprise resources for migration
//!
//! Reads organizations, workspaces, users and teams from a TFE / HCP
//! Terraform API and turns them into artifacts an infrastructure-as-code
//! pipeline or a spreadsheet can consume.
//!
//! # Features
//!
//! - Render workspaces as `tfe_workspace` resources
//! - Export verified and unfiltered user lists
//! - Export teams together with their members
//! - Follows `links.next` pagination on every list endpoint
//!
//! # Example
//!
//! ```bash
//! # Workspaces of every accessible organization
//! tfe-export workspaces --bearer_token $TOKEN --hostname tfe.example.com
//!
//! # Workspaces of selected organizations
//! tfe-export workspaces --bearer_token $TOKEN --hostname tfe.example.com --org org-a org-b
//!
//! # Users and teams to CSV files
//! tfe-export users --bearer_token $TOKEN --hostname tfe.example.com
//! tfe-export teams --bearer_token $TOKEN --hostname tfe.example.com --teams-org my-org
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, ExportCommand};
pub use config::ExportConfig;
pub use error::{Result, TfeError};
pub use hcp::{
    build_api_base_url, build_auth_headers, resolve_organizations, run_teams_command,
    run_users_command, run_workspaces_command, DomainAllowList, TfeClient, UserDirectory,
    Workspace,
};
pub use output::{export_lines, render_report, render_workspace_block};
