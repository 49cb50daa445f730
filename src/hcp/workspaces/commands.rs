//! Workspace command handlers

use log::debug;

use crate::cli::Cli;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::hcp::organizations::resolve_organizations;
use crate::hcp::TfeClient;
use crate::output::{render_report, render_workspace_block};
use crate::ui::{create_spinner, finish_spinner_with_status};

use super::Workspace;

/// Fetch workspaces of every organization, in organization order
pub async fn collect_workspaces(
    client: &TfeClient,
    organizations: &[String],
) -> Result<Vec<Workspace>> {
    let mut workspaces = Vec::new();
    for org in organizations {
        let found = client.get_workspaces(org).await?;
        debug!("Found {} workspaces for org '{}'", found.len(), org);
        workspaces.extend(found);
    }
    Ok(workspaces)
}

/// Run the workspaces export: print one resource block per workspace and a total
///
/// Returns the number of exported workspaces.
pub async fn run_workspaces_command(
    client: &TfeClient,
    cli: &Cli,
    config: &ExportConfig,
) -> Result<usize> {
    let organizations = resolve_organizations(client, &cli.org).await?;

    debug!(
        "Processing {} organizations: {:?}",
        organizations.len(),
        organizations
    );

    let spinner = create_spinner(
        &format!(
            "Fetching workspaces from {} organization(s)...",
            organizations.len()
        ),
        cli.batch,
    );
    let result = collect_workspaces(client, &organizations).await;
    finish_spinner_with_status(spinner, result.is_ok(), "Workspaces fetched");
    let workspaces = result?;

    for workspace in &workspaces {
        println!(
            "{}",
            render_workspace_block(workspace, &config.template_organization)
        );
    }
    println!("{}", render_report(workspaces.len(), "workspaces"));

    Ok(workspaces.len())
}
