//! User API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::{ApiListResponse, ApiResponse};
use crate::hcp::TfeClient;

use super::directory::UserDirectory;
use super::filter::DomainAllowList;
use super::models::{AdminUser, User};

/// Which users the site-admin listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminUserFilter {
    /// Only users that are not suspended
    ActiveOnly,
    /// Every user
    All,
}

impl AdminUserFilter {
    fn path(self) -> String {
        match self {
            AdminUserFilter::ActiveOnly => {
                format!("/{}?filter[suspended]=false", api::ADMIN_USERS)
            }
            AdminUserFilter::All => format!("/{}", api::ADMIN_USERS),
        }
    }
}

impl TfeClient {
    /// Get users from the site-admin listing (requires an admin token)
    pub async fn get_admin_users(&self, filter: AdminUserFilter) -> Result<Vec<AdminUser>> {
        let error_context = format!("admin users ({:?})", filter);
        self.fetch_all_pages::<AdminUser, ApiListResponse<AdminUser>>(
            &filter.path(),
            api::DEFAULT_PAGE_SIZE,
            &error_context,
        )
        .await
    }

    /// `id,email` lines of active users whose email domain is allowed
    pub async fn get_verified_users(&self, allow_list: &DomainAllowList) -> Result<Vec<String>> {
        let users = self.get_admin_users(AdminUserFilter::ActiveOnly).await?;
        let total = users.len();
        let verified: Vec<String> = users
            .iter()
            .filter(|user| allow_list.is_verified(user.email()))
            .map(AdminUser::export_line)
            .collect();
        debug!("{} of {} active users are verified", verified.len(), total);
        Ok(verified)
    }

    /// `id,email` lines of every user, without any filter
    pub async fn get_all_users_unfiltered(&self) -> Result<Vec<String>> {
        let users = self.get_admin_users(AdminUserFilter::All).await?;
        Ok(users.iter().map(AdminUser::export_line).collect())
    }

    /// Get a single user by ID
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let url = format!(
            "{}/{}/{}",
            self.base_url(),
            api::USERS,
            urlencoding::encode(user_id)
        );
        let response: ApiResponse<User> = self
            .get_json(&url, &format!("user '{}'", user_id))
            .await?;
        Ok(response.data)
    }

    /// Username of `user_id`, looked up once per directory
    pub async fn resolve_username(
        &self,
        user_id: &str,
        directory: &mut UserDirectory,
    ) -> Result<String> {
        if let Some(username) = directory.username(user_id) {
            debug!("Username of {} already resolved", user_id);
            return Ok(username.to_string());
        }
        let user = self.get_user(user_id).await?;
        let username = user.attributes.username;
        directory.insert(user_id, username.clone());
        Ok(username)
    }
}
