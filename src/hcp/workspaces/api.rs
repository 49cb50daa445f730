//! Workspace API operations

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Workspace;

impl TfeClient {
    /// Get all workspaces of an organization, following every page
    pub async fn get_workspaces(&self, org: &str) -> Result<Vec<Workspace>> {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );
        let error_context = format!("workspaces for organization '{}'", org);

        self.fetch_all_pages::<Workspace, ApiListResponse<Workspace>>(
            &path,
            api::WORKSPACE_PAGE_SIZE,
            &error_context,
        )
        .await
    }
}
