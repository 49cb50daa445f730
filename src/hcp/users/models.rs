//! User data models

use serde::Deserialize;

/// User as returned by the site-admin users listing
#[derive(Deserialize, Debug, Clone)]
pub struct AdminUser {
    pub id: String,
    pub attributes: AdminUserAttributes,
}

/// Site-admin user attributes
#[derive(Deserialize, Debug, Clone)]
pub struct AdminUserAttributes {
    pub email: String,
}

impl AdminUser {
    /// Email address
    pub fn email(&self) -> &str {
        &self.attributes.email
    }

    /// Export line `id,email`
    pub fn export_line(&self) -> String {
        format!("{},{}", self.id, self.attributes.email)
    }
}

/// User as returned by `/users/:id`
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub attributes: UserAttributes,
}

/// Public user attributes
#[derive(Deserialize, Debug, Clone)]
pub struct UserAttributes {
    pub username: String,
}

impl User {
    /// Username
    pub fn username(&self) -> &str {
        &self.attributes.username
    }
}
