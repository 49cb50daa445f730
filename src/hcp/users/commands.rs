//! User export command handlers

use log::info;

use crate::cli::Cli;
use crate::config::{files, ExportConfig};
use crate::error::Result;
use crate::hcp::TfeClient;
use crate::output::{export_lines, render_report};
use crate::ui::{create_spinner, finish_spinner_with_status};

use super::DomainAllowList;

/// Run the users export
///
/// Writes verified active users and then every user to their export files,
/// printing a total after each. Returns both counts.
pub async fn run_users_command(
    client: &TfeClient,
    cli: &Cli,
    config: &ExportConfig,
) -> Result<(usize, usize)> {
    let allow_list = DomainAllowList::new(config.allowed_domains.iter().cloned());

    let spinner = create_spinner("Fetching active users...", cli.batch);
    let result = client.get_verified_users(&allow_list).await;
    finish_spinner_with_status(spinner, result.is_ok(), "Active users fetched");
    let verified = result?;

    let active_path = config.output_path(files::ACTIVE_USERS);
    export_lines(&active_path, &verified)?;
    info!("Wrote {} users to {}", verified.len(), active_path.display());
    println!("{}", render_report(verified.len(), "users"));

    let spinner = create_spinner("Fetching all users...", cli.batch);
    let result = client.get_all_users_unfiltered().await;
    finish_spinner_with_status(spinner, result.is_ok(), "All users fetched");
    let all_users = result?;

    let all_path = config.output_path(files::ALL_USERS);
    export_lines(&all_path, &all_users)?;
    info!("Wrote {} users to {}", all_users.len(), all_path.display());
    println!("{}", render_report(all_users.len(), "users"));

    Ok((verified.len(), all_users.len()))
}
