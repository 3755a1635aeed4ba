//! Organization membership listings.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::errors::ApiError;

/// Organization summary from the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Login name.
    pub login: String,
}

/// All public organization memberships of a user.
///
/// # Errors
///
/// Returns an error if any page fails.
pub async fn fetch_user_orgs(client: &Client, user: &str) -> Result<Vec<Organization>, ApiError> {
    let path = format!("users/{}/orgs", urlencoding::encode(user));
    client.get_paginated(&path).await
}
