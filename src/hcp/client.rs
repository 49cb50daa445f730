//! TFE HTTP client for API interactions

use std::collections::HashSet;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// Build the headers sent with every request
///
/// The scheme prefix is the literal `BEARER `, the token is not inspected.
pub fn build_auth_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let auth = HeaderValue::from_str(&format!("BEARER {}", token)).map_err(|_| {
        TfeError::Config("bearer token contains characters not allowed in a header".to_string())
    })?;
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/vnd.api+json"),
    );
    Ok(headers)
}

/// Build the API base URL for a host
///
/// A bare hostname gets `https://`; a value that already names a scheme is kept.
pub fn build_api_base_url(hostname: &str, version: &str) -> String {
    let host = hostname.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{}{}/{}", host, api::BASE_PATH, version)
    } else {
        format!("https://{}{}/{}", host, api::BASE_PATH, version)
    }
}

/// TFE API client
pub struct TfeClient {
    client: Client,
    base_url: String,
    max_pages: usize,
}

impl TfeClient {
    /// Create a client for `hostname` authenticating with `token`
    pub fn new(token: &str, hostname: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(build_auth_headers(token)?)
            .build()?;

        Ok(Self {
            client,
            base_url: build_api_base_url(hostname, api::VERSION),
            max_pages: api::MAX_PAGES,
        })
    }

    /// Override the page limit applied by `walk_pages`
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first page of a list endpoint
    pub(crate) fn list_url(&self, path: &str, page_size: u32) -> String {
        let separator = if path.contains('?') { "&" } else { "?" };
        format!(
            "{}{}{}page[size]={}",
            self.base_url, path, separator, page_size
        )
    }

    /// Issue one GET and decode the JSON body
    ///
    /// Non-success statuses and undecodable bodies are errors naming
    /// `error_context` and the URL.
    pub async fn get_json<T>(&self, url: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TfeError::Api {
                status: status.as_u16(),
                message: format!("Failed to fetch {} ({})", error_context, url),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| TfeError::Json(format!("Failed to parse {}: {}", error_context, e)))
    }

    /// Follow `links.next` from `first_page_url` until no next page is reported
    ///
    /// Items are returned in API order, page after page. The walk fails
    /// instead of looping when a link repeats or the page limit is hit.
    pub async fn walk_pages<T, R>(&self, first_page_url: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let mut all_items = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut next_url = Some(first_page_url.to_string());
        let mut page_num = 0usize;

        while let Some(url) = next_url.take() {
            page_num += 1;
            if page_num > self.max_pages {
                return Err(TfeError::Pagination(format!(
                    "{} exceeded {} pages",
                    error_context, self.max_pages
                )));
            }
            if !visited.insert(url.clone()) {
                return Err(TfeError::Pagination(format!(
                    "{} links back to an already fetched page: {}",
                    error_context, url
                )));
            }

            let page_context = format!("{} (page {})", error_context, page_num);
            let page: R = self.get_json(&url, &page_context).await?;

            if page.has_next_page() {
                let link = page.next_link().ok_or_else(|| {
                    TfeError::Pagination(format!(
                        "{} reports a next page without links.next",
                        page_context
                    ))
                })?;
                next_url = Some(link.to_string());
            }

            let items = page.into_data();
            debug!("Page {} returned {} items", page_num, items.len());
            all_items.extend(items);
        }

        debug!(
            "Fetched {} total items for {} across {} pages",
            all_items.len(),
            error_context,
            page_num
        );
        Ok(all_items)
    }

    /// Walk every page of a list endpoint under the base URL
    pub async fn fetch_all_pages<T, R>(
        &self,
        path: &str,
        page_size: u32,
        error_context: &str,
    ) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let first_page_url = self.list_url(path, page_size);
        self.walk_pages::<T, R>(&first_page_url, error_context)
            .await
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(server_uri: &str) -> Self {
        Self::new("test-token", server_uri).expect("test client")
    }
}
