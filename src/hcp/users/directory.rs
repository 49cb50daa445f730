//! Per-run user lookup table

use std::collections::HashMap;

/// Usernames resolved during one export, keyed by user ID
///
/// Created by the caller and passed explicitly to the collectors that need it.
#[derive(Debug, Default)]
pub struct UserDirectory {
    usernames: HashMap<String, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Username recorded for `user_id`
    pub fn username(&self, user_id: &str) -> Option<&str> {
        self.usernames.get(user_id).map(String::as_str)
    }

    /// Record the username of `user_id`
    pub fn insert(&mut self, user_id: impl Into<String>, username: impl Into<String>) {
        self.usernames.insert(user_id.into(), username.into());
    }

    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut directory = UserDirectory::new();
        assert!(directory.is_empty());

        directory.insert("user-1", "alice");
        assert_eq!(directory.username("user-1"), Some("alice"));
        assert_eq!(directory.username("user-2"), None);
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut directory = UserDirectory::new();
        directory.insert("user-1", "old");
        directory.insert("user-1", "new");
        assert_eq!(directory.username("user-1"), Some("new"));
        assert_eq!(directory.len(), 1);
    }
}
