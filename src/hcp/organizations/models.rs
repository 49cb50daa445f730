//! Organization data models

use serde::Deserialize;

/// Organization data from TFE API
///
/// The API uses the organization name as `id`.
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub id: String,
}
