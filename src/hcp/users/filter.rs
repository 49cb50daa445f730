//! Email-domain classification of users

use std::collections::HashSet;

/// Set of email domains whose users count as verified
#[derive(Debug, Clone, Default)]
pub struct DomainAllowList {
    domains: HashSet<String>,
}

impl DomainAllowList {
    /// Build an allow-list from domain names
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff the text after the last `@` is exactly an allowed domain
    ///
    /// Addresses without `@` never match. Comparison is case-sensitive.
    pub fn is_verified(&self, email: &str) -> bool {
        email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| self.domains.contains(domain))
    }

    /// Number of allowed domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether no domain is allowed
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
