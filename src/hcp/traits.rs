//! Common traits for TFE list responses

use serde::Deserialize;

use crate::hcp::{PageLinks, PaginationMeta};

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any response struct to enable use with
/// `TfeClient::walk_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
    /// Get reference to navigation links
    fn links(&self) -> Option<&PageLinks>;

    /// Whether the API reports a page after this one
    fn has_next_page(&self) -> bool {
        self.meta()
            .and_then(|m| m.pagination.as_ref())
            .and_then(|p| p.next_page)
            .is_some()
    }

    /// URL of the next page as given in `links.next`
    fn next_link(&self) -> Option<&str> {
        self.links().and_then(|l| l.next.as_deref())
    }
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
    #[serde(default)]
    pub links: Option<PageLinks>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }

    fn links(&self) -> Option<&PageLinks> {
        self.links.as_ref()
    }
}

/// Single-resource API response wrapper
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}
