//! Repository listings and their tabular form.

use serde::{Deserialize, Serialize};

use ghre_core::Table;

use crate::client::Client;
use crate::errors::ApiError;

/// Header row of the exported table.
pub const REPO_TABLE_HEADERS: [&str; 5] = ["NAME", "URL", "HOMEPAGE", "DESCRIPTION", "CREATED_AT"];

/// Repository metadata from the REST API.
///
/// Only the exported fields are decoded; everything else in the payload is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// `owner/name`.
    pub full_name: String,
    /// Web URL.
    pub html_url: String,
    /// Project homepage.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp, kept verbatim.
    pub created_at: String,
}

impl Repository {
    /// The repository as a table row, in [`REPO_TABLE_HEADERS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.html_url.clone(),
            self.homepage.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
            self.created_at.clone(),
        ]
    }
}

/// Build the export table: header row, then one row per repository in input
/// order. Duplicates are kept.
pub fn repos_to_table(repos: &[Repository]) -> Table {
    let mut table = Table::new(&REPO_TABLE_HEADERS);
    for repo in repos {
        table.add_row(repo.to_row());
    }
    table
}

/// All repositories listed for a user.
///
/// # Errors
///
/// Returns an error if any page fails.
pub async fn fetch_user_repos(client: &Client, user: &str) -> Result<Vec<Repository>, ApiError> {
    let path = format!("users/{}/repos", urlencoding::encode(user));
    client.get_paginated(&path).await
}

/// All repositories listed for an organization.
///
/// # Errors
///
/// Returns an error if any page fails.
pub async fn fetch_org_repos(client: &Client, org: &str) -> Result<Vec<Repository>, ApiError> {
    let path = format!("orgs/{}/repos", urlencoding::encode(org));
    client.get_paginated(&path).await
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn repo(full_name: &str, homepage: Option<&str>, description: Option<&str>) -> Repository {
        Repository {
            full_name: full_name.to_string(),
            html_url: format!("https://github.com/{full_name}"),
            homepage: homepage.map(str::to_string),
            description: description.map(str::to_string),
            created_at: "2020-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_should_deserialize_repository_ignoring_extra_fields() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "homepage": "https://github.com",
            "description": "This your first repo!",
            "created_at": "2011-01-26T19:01:12Z",
            "fork": false
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "octocat/Hello-World");
        assert_eq!(repo.homepage.as_deref(), Some("https://github.com"));
        assert_eq!(repo.description.as_deref(), Some("This your first repo!"));
        assert_eq!(repo.created_at, "2011-01-26T19:01:12Z");
    }

    #[test]
    fn test_should_deserialize_null_and_missing_optionals_as_none() {
        let json = r#"{
            "full_name": "octocat/empty",
            "html_url": "https://github.com/octocat/empty",
            "homepage": null,
            "created_at": "2011-01-26T19:01:12Z"
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert!(repo.homepage.is_none());
        assert!(repo.description.is_none());
    }

    #[test]
    fn test_should_reject_repository_without_full_name() {
        let json = r#"{"html_url": "https://github.com/x/y", "created_at": "2011"}"#;
        assert!(serde_json::from_str::<Repository>(json).is_err());
    }

    #[test]
    fn test_should_render_missing_optionals_as_empty_strings() {
        let row = repo("alice/tool", None, None).to_row();
        assert_eq!(
            row,
            vec![
                "alice/tool".to_string(),
                "https://github.com/alice/tool".to_string(),
                String::new(),
                String::new(),
                "2020-01-01T00:00:00Z".to_string(),
            ]
        );
    }

    #[test]
    fn test_should_build_table_with_header_and_rows_in_order() {
        let repos = vec![
            repo("alice/one", Some("https://one.dev"), Some("first")),
            repo("alice/two", None, Some("second")),
            repo("acme/three", None, None),
        ];
        let table = repos_to_table(&repos);

        assert_eq!(table.headers(), REPO_TABLE_HEADERS.map(String::from).as_slice());
        assert_eq!(table.row_count(), 4);
        let names: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["alice/one", "alice/two", "acme/three"]);
        assert!(table.rows().iter().all(|r| r.len() == 5));
    }

    #[test]
    fn test_should_keep_duplicate_repositories() {
        let repos = vec![repo("acme/shared", None, None), repo("acme/shared", None, None)];
        let table = repos_to_table(&repos);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_should_build_header_only_table_for_no_repositories() {
        let table = repos_to_table(&[]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 1);
    }
}
