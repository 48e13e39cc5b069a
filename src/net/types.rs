//! Wire DTOs for the user-api and shortener-api backends.
//!
//! DESIGN
//! ======
//! Field names mirror each backend's JSON exactly: user-api emits
//! snake_case, shortener-api camelCase. Every type stays serde
//! round-trippable so the envelope layer can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Uniform backend response wrapper, independent of HTTP status.
///
/// `code == 0` signals success; any nonzero code is a business failure.
/// Failure responses carry `data: null`, so the payload is optional here
/// even for endpoints that always return one on success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// Account profile returned by user-api.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// `"admin"` unlocks the admin-only views; anything else is an
    /// ordinary account.
    pub role: String,
    /// RFC3339 creation timestamp.
    pub created_at: String,
}

/// Credentials for `POST /user/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// New-account payload for `POST /user/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token grant returned by `POST /user/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    /// Unix expiry of the token. Informational; the backend enforces it.
    pub access_expire: i64,
}

/// A short link as returned by shortener-api.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub is_active: bool,
    /// RFC3339 expiry, absent for permanent links.
    pub expiration_time: Option<String>,
    pub created_at: String,
}

/// Aggregate metrics for the dashboard view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_links: i64,
    pub total_clicks: i64,
    /// Most-visited link, absent while the account has none.
    pub top_link: Option<Link>,
}

/// Query for the paged link listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLinksParams {
    pub page: i64,
    pub page_size: i64,
    /// `"active"`, `"expired"`, `"inactive"`, or `"all"`.
    pub status: String,
}

impl Default for ListLinksParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            status: "all".to_owned(),
        }
    }
}

/// One page of links plus the unpaged total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLinksResponse {
    pub links: Vec<Link>,
    pub total: i64,
}

/// Payload for `POST /links`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
}

/// Payload for `PUT /links/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    pub is_active: bool,
}

/// One page of accounts for the admin user view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserInfo>,
    pub total: i64,
}
