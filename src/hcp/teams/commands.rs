//! Team export command handlers

use log::{debug, info};

use crate::cli::Cli;
use crate::config::{files, ExportConfig};
use crate::error::Result;
use crate::hcp::users::UserDirectory;
use crate::hcp::TfeClient;
use crate::output::{export_lines, render_report};
use crate::ui::{create_spinner, finish_spinner_with_status};

/// Run the teams export
///
/// Writes the flattened team report and prints a total of written lines.
pub async fn run_teams_command(
    client: &TfeClient,
    cli: &Cli,
    config: &ExportConfig,
) -> Result<usize> {
    let org = &config.teams_organization;
    debug!("Fetching teams for organization: {}", org);

    let mut directory = UserDirectory::new();
    let spinner = create_spinner(&format!("Fetching teams for '{}'...", org), cli.batch);
    let result = client.get_team_member_lines(org, &mut directory).await;
    finish_spinner_with_status(spinner, result.is_ok(), "Teams fetched");
    let lines = result?;
    debug!("Resolved {} distinct team members", directory.len());

    let teams_path = config.output_path(files::TEAMS_BY_USERS);
    export_lines(&teams_path, &lines)?;
    info!("Wrote {} lines to {}", lines.len(), teams_path.display());
    println!("{}", render_report(lines.len(), "teams"));

    Ok(lines.len())
}
