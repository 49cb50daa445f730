//! Organization API operations

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Organization;

impl TfeClient {
    /// Get all organizations accessible to the token (names only)
    pub async fn get_organization_ids(&self) -> Result<Vec<String>> {
        let orgs = self.get_organizations().await?;
        Ok(orgs.into_iter().map(|org| org.id).collect())
    }

    /// Get all organizations accessible to the token
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        let path = format!("/{}", api::ORGANIZATIONS);
        self.fetch_all_pages::<Organization, ApiListResponse<Organization>>(
            &path,
            api::DEFAULT_PAGE_SIZE,
            "organizations",
        )
        .await
    }
}
