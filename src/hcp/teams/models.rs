//! Team data models

use serde::Deserialize;

/// Team data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Team {
    pub id: String,
    pub attributes: TeamAttributes,
    pub relationships: TeamRelationships,
}

/// Team attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct TeamAttributes {
    pub name: String,
    #[serde(rename = "users-count")]
    pub users_count: u32,
}

/// Team relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct TeamRelationships {
    pub users: TeamUsersRelationship,
}

/// Users relationship
#[derive(Deserialize, Debug, Clone)]
pub struct TeamUsersRelationship {
    pub data: Vec<TeamUserRef>,
}

/// User reference in team
#[derive(Deserialize, Debug, Clone)]
pub struct TeamUserRef {
    pub id: String,
    #[serde(rename = "type")]
    pub ref_type: String,
}

impl Team {
    /// Team name
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// Member references in relationship order
    pub fn members(&self) -> &[TeamUserRef] {
        &self.relationships.users.data
    }

    /// Summary line `id,name,users-count,member-references`
    pub fn summary_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.id,
            self.attributes.name,
            self.attributes.users_count,
            self.members().len()
        )
    }
}

impl TeamUserRef {
    /// Member line `user-id,type,username`
    pub fn member_line(&self, username: &str) -> String {
        format!("{},{},{}", self.id, self.ref_type, username)
    }
}
