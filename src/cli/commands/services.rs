//! Authenticated API clients shared by the commands.

use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::gitlab::GitLabClient;
use crate::gogs::GogsClient;

/// A GitLab client whose token has been checked against `/user`.
pub fn connect_gitlab(settings: &Settings) -> Result<GitLabClient> {
    let client = GitLabClient::new(
        &settings.gitlab_url,
        &settings.gitlab_token,
        settings.timeout,
    )?;
    let user = client.authenticate()?;
    info!("Authenticated with GitLab as {}", user.username);
    Ok(client)
}

/// A Gogs client whose target organization, if any, is known to exist.
pub fn connect_gogs(settings: &Settings) -> Result<GogsClient> {
    let client = GogsClient::new(
        &settings.gogs_url,
        &settings.gogs_username,
        &settings.gogs_token,
        settings.owner(),
        settings.timeout,
    )?;
    client.verify_org()?;
    Ok(client)
}

#[cfg(test)]
pub(crate) mod testing {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::{RawSettings, Settings};

    /// Settings pointing both GitLab and Gogs at `server`.
    pub fn settings_for(server: &MockServer, org: Option<&str>) -> RawSettings {
        RawSettings {
            gitlab_host: Some(server.base_url()),
            gitlab_token: Some("glpat-test".into()),
            gitlab_group: Some("acme".into()),
            gogs_url: Some(server.base_url()),
            gogs_username: Some("alice".into()),
            gogs_token: Some("gogs-test".into()),
            gogs_org: org.map(String::from),
            timeout_secs: Some(5),
        }
    }

    pub fn resolved(server: &MockServer, org: Option<&str>) -> Settings {
        Settings::resolve(settings_for(server, org)).unwrap()
    }

    pub fn project_json(id: u64, path: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": path,
            "path": path,
            "path_with_namespace": format!("acme/{path}"),
            "description": format!("{path} service"),
            "visibility": "private",
            "http_url_to_repo": format!("https://gitlab.example.com/acme/{path}.git"),
            "archived": false
        })
    }

    /// Mock `/user`, the `acme` group and its project listing.
    pub fn mock_gitlab(server: &MockServer, projects: &[(u64, &str)]) {
        let listing: Vec<_> = projects
            .iter()
            .map(|(id, path)| project_json(*id, path))
            .collect();
        mock_gitlab_projects(server, &listing);
    }

    /// Like [`mock_gitlab`], with full project records.
    pub fn mock_gitlab_projects(server: &MockServer, listing: &[serde_json::Value]) {
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v4/user")
                .header("PRIVATE-TOKEN", "glpat-test");
            then.status(200).json_body(json!({"id": 1, "username": "alice"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v4/groups/acme");
            then.status(200)
                .json_body(json!({"id": 42, "name": "Acme", "full_path": "acme"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v4/groups/42/projects");
            then.status(200).json_body(json!(listing));
        });
        for body in listing {
            let id = body["id"].as_u64().unwrap();
            let body = body.clone();
            server.mock(|when, then| {
                when.method(GET).path(format!("/api/v4/projects/{id}"));
                then.status(200).json_body(body);
            });
        }
    }
}
