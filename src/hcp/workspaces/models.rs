//! Workspace data models

use serde::Deserialize;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
}

/// Workspace attributes needed to recreate the workspace as code
///
/// All fields are required: a workspace missing any of them aborts the export.
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    #[serde(rename = "execution-mode")]
    pub execution_mode: String,

    #[serde(rename = "terraform-version")]
    pub terraform_version: String,

    #[serde(rename = "tag-names")]
    pub tag_names: Vec<String>,
}

impl Workspace {
    /// Workspace name
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// Execution mode (remote, local, agent)
    pub fn execution_mode(&self) -> &str {
        &self.attributes.execution_mode
    }

    /// Pinned Terraform version
    pub fn terraform_version(&self) -> &str {
        &self.attributes.terraform_version
    }

    /// Tag names in API order
    pub fn tag_names(&self) -> &[String] {
        &self.attributes.tag_names
    }
}
