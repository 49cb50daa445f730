use std::path::PathBuf;

use crate::cli::Cli;

/// Configuration constants for TFE API
pub mod api {
    /// Base path for the TFE API (version appended)
    pub const BASE_PATH: &str = "/api";

    /// API version used by every endpoint
    pub const VERSION: &str = "v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Teams endpoint
    pub const TEAMS: &str = "teams";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Site-admin users endpoint
    pub const ADMIN_USERS: &str = "admin/users";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Page size for workspace listings
    pub const WORKSPACE_PAGE_SIZE: u32 = 20;

    /// Upper bound on pages followed by a single walk
    pub const MAX_PAGES: usize = 10_000;
}

/// Default values for CLI and export configuration
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Organization written into rendered workspace blocks
    pub const TEMPLATE_ORGANIZATION: &str = "wpp-wppit-dev";

    /// Organization whose teams are exported
    pub const TEAMS_ORGANIZATION: &str = "WPP-Open-Central";

    /// Email domains whose users count as verified
    pub const ALLOWED_DOMAINS: &[&str] = &[
        "groupm.com",
        "groupm.tech",
        "mediacom.com",
        "wpp.com",
        "hashicorp.com",
    ];

    /// Directory export files are written to
    pub const OUTPUT_DIR: &str = ".";
}

/// Export file names
pub mod files {
    /// Active users with a verified email domain
    pub const ACTIVE_USERS: &str = "all_active_users.csv";

    /// Every user, no suspension or domain filter
    pub const ALL_USERS: &str = "all_users_no_filter.csv";

    /// Teams with their resolved members
    pub const TEAMS_BY_USERS: &str = "teams-by-users.csv";
}

/// Deployment-specific values that shape the exported artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Organization name embedded in every rendered workspace block
    pub template_organization: String,
    /// Organization whose teams are listed by the `teams` command
    pub teams_organization: String,
    /// Email domains accepted by the user classifier
    pub allowed_domains: Vec<String>,
    /// Directory receiving the CSV exports
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            template_organization: defaults::TEMPLATE_ORGANIZATION.to_string(),
            teams_organization: defaults::TEAMS_ORGANIZATION.to_string(),
            allowed_domains: defaults::ALLOWED_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
        }
    }
}

impl ExportConfig {
    /// Build configuration from CLI flags, falling back to defaults
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        if let Some(org) = &cli.template_org {
            config.template_organization = org.clone();
        }
        if let Some(org) = &cli.teams_org {
            config.teams_organization = org.clone();
        }
        if !cli.allowed_domain.is_empty() {
            config.allowed_domains = cli.allowed_domain.clone();
        }
        if let Some(dir) = &cli.output_dir {
            config.output_dir = dir.clone();
        }
        config
    }

    /// Full path of an export file inside the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
