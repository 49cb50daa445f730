//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::defaults;

/// TFE resource exporter CLI
#[derive(Parser, Debug)]
#[command(name = "tfe-export")]
#[command(version)]
#[command(
    about = "Export TfE/TfC resources in a form to be managed by tfe provider",
    long_about = None
)]
pub struct Cli {
    /// Resource to export: workspaces, teams or users
    pub command: Option<String>,

    /// Bearer token for TfE/TfC
    #[arg(long = "bearer_token")]
    pub bearer_token: Option<String>,

    /// Hostname of the target Terraform (a scheme may be included)
    #[arg(long)]
    pub hostname: Option<String>,

    /// Organizations to interact with (all accessible ones when omitted)
    #[arg(long, num_args = 0..)]
    pub org: Vec<String>,

    /// Organization written into rendered workspace resources
    #[arg(long)]
    pub template_org: Option<String>,

    /// Organization whose teams are exported
    #[arg(long)]
    pub teams_org: Option<String>,

    /// Email domain treated as verified (repeatable, replaces the default list)
    #[arg(long)]
    pub allowed_domain: Vec<String>,

    /// Directory for CSV exports
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no progress spinners
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

/// Exportable resource types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportCommand {
    /// Render workspaces as tfe_workspace resources
    Workspaces,
    /// Export teams with their members
    Teams,
    /// Export verified and unfiltered user lists
    Users,
}

impl ExportCommand {
    /// Parse a positional command name, `None` when unrecognised
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, false).ok()
    }
}

impl std::fmt::Display for ExportCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportCommand::Workspaces => write!(f, "workspaces"),
            ExportCommand::Teams => write!(f, "teams"),
            ExportCommand::Users => write!(f, "users"),
        }
    }
}

impl Cli {
    /// Token passed with `--bearer_token`, or a configuration error
    pub fn require_token(&self) -> crate::Result<&str> {
        self.bearer_token
            .as_deref()
            .ok_or_else(|| crate::TfeError::Config("--bearer_token is required".to_string()))
    }

    /// Host passed with `--hostname`, or a configuration error
    pub fn require_hostname(&self) -> crate::Result<&str> {
        self.hostname
            .as_deref()
            .ok_or_else(|| crate::TfeError::Config("--hostname is required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["tfe-export"]);
        assert!(cli.command.is_none());
        assert!(cli.bearer_token.is_none());
        assert!(cli.hostname.is_none());
        assert!(cli.org.is_empty());
        assert!(cli.allowed_domain.is_empty());
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
    }

    #[test]
    fn test_cli_full_invocation() {
        let cli = Cli::parse_from([
            "tfe-export",
            "--bearer_token",
            "abc.atlasv1.xyz",
            "--hostname",
            "tfe.example.com",
            "workspaces",
        ]);
        assert_eq!(cli.command.as_deref(), Some("workspaces"));
        assert_eq!(cli.require_token().unwrap(), "abc.atlasv1.xyz");
        assert_eq!(cli.require_hostname().unwrap(), "tfe.example.com");
    }

    #[test]
    fn test_cli_multiple_orgs() {
        let cli = Cli::parse_from(["tfe-export", "workspaces", "--org", "org-a", "org-b"]);
        assert_eq!(cli.org, vec!["org-a", "org-b"]);
    }

    #[test]
    fn test_cli_org_flag_without_values() {
        let cli = Cli::parse_from(["tfe-export", "workspaces", "--org"]);
        assert!(cli.org.is_empty());
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let cli = Cli::parse_from(["tfe-export", "users", "--hostname", "h"]);
        let err = cli.require_token().unwrap_err();
        assert!(err.to_string().contains("--bearer_token"));
    }

    #[test]
    fn test_export_command_parse() {
        assert_eq!(
            ExportCommand::parse("workspaces"),
            Some(ExportCommand::Workspaces)
        );
        assert_eq!(ExportCommand::parse("teams"), Some(ExportCommand::Teams));
        assert_eq!(ExportCommand::parse("users"), Some(ExportCommand::Users));
        assert_eq!(ExportCommand::parse("projects"), None);
        assert_eq!(ExportCommand::parse("Users"), None);
    }

    #[test]
    fn test_export_command_display() {
        assert_eq!(ExportCommand::Workspaces.to_string(), "workspaces");
        assert_eq!(ExportCommand::Teams.to_string(), "teams");
        assert_eq!(ExportCommand::Users.to_string(), "users");
    }
}
