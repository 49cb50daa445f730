//! Organization resolution for per-organization exports

use log::debug;

use crate::error::Result;
use crate::hcp::TfeClient;

/// Resolve organizations - use the ones given on the command line or fetch all
pub async fn resolve_organizations(client: &TfeClient, orgs: &[String]) -> Result<Vec<String>> {
    if orgs.is_empty() {
        debug!("No organization specified, fetching all organizations");
        client.get_organization_ids().await
    } else {
        debug!("Using specified organizations: {:?}", orgs);
        Ok(orgs.to_vec())
    }
}
