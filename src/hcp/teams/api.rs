//! Team API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::users::UserDirectory;
use crate::hcp::TfeClient;

use super::models::Team;

impl TfeClient {
    /// Get all teams for an organization (with pagination)
    pub async fn get_teams(&self, org: &str) -> Result<Vec<Team>> {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::TEAMS
        );
        let error_context = format!("teams for organization '{}'", org);

        self.fetch_all_pages::<Team, ApiListResponse<Team>>(
            &path,
            api::DEFAULT_PAGE_SIZE,
            &error_context,
        )
        .await
    }

    /// Flatten the teams of `org` into report lines
    ///
    /// Each team contributes its summary line followed by one line per member,
    /// in relationship order. Usernames not yet in `directory` are fetched.
    pub async fn get_team_member_lines(
        &self,
        org: &str,
        directory: &mut UserDirectory,
    ) -> Result<Vec<String>> {
        let teams = self.get_teams(org).await?;
        debug!("Resolving members of {} teams in '{}'", teams.len(), org);

        let mut lines = Vec::new();
        for team in &teams {
            lines.push(team.summary_line());
            for member in team.members() {
                let username = self.resolve_username(&member.id, directory).await?;
                lines.push(member.member_line(&username));
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfeError;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn team_json(id: &str, name: &str, users_count: u32, members: &[&str]) -> serde_json::Value {
        let data: Vec<serde_json::Value> = members
            .iter()
            .map(|m| serde_json::json!({ "id": m, "type": "users" }))
            .collect();
        serde_json::json!({
            "id": id,
            "type": "teams",
            "attributes": { "name": name, "users-count": users_count },
            "relationships": { "users": { "data": data } }
        })
    }

    async fn mount_user(server: &MockServer, id: &str, username: &str, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v2/users/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "id": id, "type": "users", "attributes": { "username": username } }
            })))
            .expect(times)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_get_teams_pagination() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/my-org/teams"))
            .and(query_param_is_missing("page[number]"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-1", "team-one", 0, &[])],
                "links": {
                    "next": format!("{}/api/v2/organizations/my-org/teams?page[number]=2", mock_server.uri())
                },
                "meta": { "pagination": { "current-page": 1, "next-page": 2 } }
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/my-org/teams"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-2", "team-two", 0, &[])],
                "meta": { "pagination": { "current-page": 2, "next-page": null } }
            })))
            .mount(&mock_server)
            .await;

        let teams = client.get_teams("my-org").await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name(), "team-one");
        assert_eq!(teams[1].name(), "team-two");
    }

    #[tokio::test]
    async fn test_member_lines_follow_relationship_order() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-a", "platform", 2, &["user-a", "user-b"])]
            })))
            .mount(&mock_server)
            .await;
        mount_user(&mock_server, "user-a", "alice", 1).await;
        mount_user(&mock_server, "user-b", "bob", 1).await;

        let mut directory = UserDirectory::new();
        let lines = client
            .get_team_member_lines("acme", &mut directory)
            .await
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "team-a,platform,2,2",
                "user-a,users,alice",
                "user-b,users,bob",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_team_has_only_summary() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    team_json("team-empty", "nobody", 0, &[]),
                    team_json("team-one", "solo", 1, &["user-a"])
                ]
            })))
            .mount(&mock_server)
            .await;
        mount_user(&mock_server, "user-a", "alice", 1).await;

        let mut directory = UserDirectory::new();
        let lines = client
            .get_team_member_lines("acme", &mut directory)
            .await
            .unwrap();

        assert_eq!(
            lines,
            vec!["team-empty,nobody,0,0", "team-one,solo,1,1", "user-a,users,alice"]
        );
    }

    #[tokio::test]
    async fn test_shared_member_resolved_once() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    team_json("team-1", "devs", 1, &["user-a"]),
                    team_json("team-2", "ops", 1, &["user-a"])
                ]
            })))
            .mount(&mock_server)
            .await;
        mount_user(&mock_server, "user-a", "alice", 1).await;

        let mut directory = UserDirectory::new();
        let lines = client
            .get_team_member_lines("acme", &mut directory)
            .await
            .unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "user-a,users,alice");
    }

    #[tokio::test]
    async fn test_member_lookup_failure_is_fatal() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-1", "devs", 1, &["user-gone"])]
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/users/user-gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let mut directory = UserDirectory::new();
        let err = client
            .get_team_member_lines("acme", &mut directory)
            .await
            .unwrap_err();
        match err {
            TfeError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("user-gone"));
            }
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }
}
