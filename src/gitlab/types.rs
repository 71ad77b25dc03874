//! GitLab REST v4 resource shapes.
//!
//! Only the fields the mirror needs are modelled; everything else in the
//! API responses is ignored.

use serde::{Deserialize, Serialize};

/// The authenticated user (`GET /user`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitLabUser {
    pub id: u64,
    pub username: String,
}

/// A GitLab group (`GET /groups/:id`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitLabGroup {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_path: String,
}

/// A GitLab project (`GET /projects/:id`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitLabProject {
    pub id: u64,
    pub name: String,
    /// URL slug of the project inside its namespace.
    pub path: String,
    pub path_with_namespace: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `public`, `internal` or `private`; absent for some token scopes.
    #[serde(default)]
    pub visibility: Option<String>,
    pub http_url_to_repo: String,
    #[serde(default)]
    pub archived: bool,
}

impl GitLabProject {
    /// Whether the project is publicly visible. Unknown visibility is not public.
    pub fn is_public(&self) -> bool {
        self.visibility.as_deref() == Some("public")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_project() {
        let json = r#"{
            "id": 7,
            "name": "Billing API",
            "path": "billing-api",
            "path_with_namespace": "acme/backend/billing-api",
            "description": "Invoices",
            "visibility": "internal",
            "http_url_to_repo": "https://gitlab.com/acme/backend/billing-api.git",
            "archived": false,
            "star_count": 3
        }"#;

        let project: GitLabProject = serde_json::from_str(json).unwrap();

        assert_eq!(project.id, 7);
        assert_eq!(project.path, "billing-api");
        assert_eq!(project.description.as_deref(), Some("Invoices"));
        assert!(!project.is_public());
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "id": 1,
            "name": "tool",
            "path": "tool",
            "path_with_namespace": "acme/tool",
            "description": null,
            "http_url_to_repo": "https://gitlab.com/acme/tool.git"
        }"#;

        let project: GitLabProject = serde_json::from_str(json).unwrap();

        assert_eq!(project.description, None);
        assert_eq!(project.visibility, None);
        assert!(!project.archived);
        assert!(!project.is_public());
    }

    #[test]
    fn public_visibility() {
        let json = r#"{
            "id": 1,
            "name": "site",
            "path": "site",
            "path_with_namespace": "acme/site",
            "visibility": "public",
            "http_url_to_repo": "https://gitlab.com/acme/site.git"
        }"#;

        let project: GitLabProject = serde_json::from_str(json).unwrap();

        assert!(project.is_public());
    }

    #[test]
    fn group_full_path_is_optional() {
        let group: GitLabGroup = serde_json::from_str(r#"{"id": 3, "name": "Acme"}"#).unwrap();

        assert_eq!(group.name, "Acme");
        assert_eq!(group.full_path, "");
    }
}
