//! Workspace resource formatter

use crate::hcp::Workspace;

/// Render a workspace as a `tfe_workspace` resource block
///
/// `organization` is written as given, independent of the organization the
/// workspace was fetched from.
pub fn render_workspace_block(workspace: &Workspace, organization: &str) -> String {
    format!(
        r#"resource "tfe_workspace" "{name}" {{
  name         = "{name}"
  organization = "{organization}"
  execution_mode = "{execution_mode}"
  terraform_version = "{terraform_version}"
  tag_names    = [{tags}]
}}
"#,
        name = workspace.name(),
        organization = organization,
        execution_mode = workspace.execution_mode(),
        terraform_version = workspace.terraform_version(),
        tags = quote_tags(workspace.tag_names()),
    )
}

/// Quote each tag and join with `, `
pub fn quote_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("\"{}\"", tag))
        .collect::<Vec<_>>()
        .join(", ")
}
