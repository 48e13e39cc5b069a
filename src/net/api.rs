//! REST client for the console backends: bearer attach, envelope
//! settlement, and error surfacing.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>`. The user-visible side
//! effects (error notice, forced logout on a reserved code) are applied
//! here before the `Err` is returned, so callers only handle local
//! concerns. No call is ever retried; concurrently in-flight calls are
//! independent, and a logout triggered by one does not cancel the others.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::{ApiError, is_token_invalid};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{ApiEnvelope, ListLinksParams};
#[cfg(feature = "hydrate")]
use crate::net::types::{
    CreateLinkRequest, DashboardData, Link, ListLinksResponse, ListUsersResponse, LoginRequest,
    LoginResponse, RegisterRequest, UpdateLinkRequest, UserInfo,
};
use crate::state::notice::Notices;
use crate::state::session::Session;
#[cfg(feature = "hydrate")]
use crate::state::session::bearer_header;
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// All console endpoints live under this prefix; the dev server proxies
/// it to the backend gateways.
pub const API_PREFIX: &str = "/api/v1";

/// Notice text used when a business failure arrives without a message.
#[cfg(any(test, feature = "hydrate"))]
const FALLBACK_ERROR_MSG: &str = "request failed";

/// Notice prefix marking transport-level failures.
#[cfg(any(test, feature = "hydrate"))]
const NETWORK_ERROR_PREFIX: &str = "network error";

// =============================================================================
// ENDPOINT PATHS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{API_PREFIX}/user/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    format!("{API_PREFIX}/user/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_info_endpoint() -> String {
    format!("{API_PREFIX}/user/info")
}

#[cfg(any(test, feature = "hydrate"))]
fn dashboard_endpoint() -> String {
    format!("{API_PREFIX}/dashboard")
}

#[cfg(any(test, feature = "hydrate"))]
fn links_endpoint() -> String {
    format!("{API_PREFIX}/links")
}

#[cfg(any(test, feature = "hydrate"))]
fn link_endpoint(id: i64) -> String {
    format!("{API_PREFIX}/links/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_users_endpoint() -> String {
    format!("{API_PREFIX}/admin/users")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_links_endpoint() -> String {
    format!("{API_PREFIX}/admin/links")
}

/// Append the paging/filter query of a link listing to `path`.
#[cfg(any(test, feature = "hydrate"))]
fn link_list_query(path: &str, params: &ListLinksParams) -> String {
    format!(
        "{path}?page={}&pageSize={}&status={}",
        params.page, params.page_size, params.status
    )
}

/// Append a plain paging query to `path`.
#[cfg(any(test, feature = "hydrate"))]
fn page_query(path: &str, page: i64, page_size: i64) -> String {
    format!("{path}?page={page}&pageSize={page_size}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("{FALLBACK_ERROR_MSG}: {status}")
}

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP + envelope client bound to the shared session and notice handles.
#[derive(Clone)]
pub struct ApiClient {
    session: Session,
    notices: Notices,
}

impl ApiClient {
    pub fn new(session: Session, notices: Notices) -> Self {
        Self { session, notices }
    }
}

#[cfg(any(test, feature = "hydrate"))]
impl ApiClient {
    /// Settle a decoded envelope: unwrap `data` on success, otherwise
    /// apply the failure side effects and reject.
    ///
    /// A reserved token-invalid code tears the session down (which also
    /// redirects to login) in addition to the notice; the caller still
    /// receives the business error afterwards.
    fn settle<T>(&self, envelope: ApiEnvelope<T>) -> Result<Option<T>, ApiError> {
        if envelope.code == 0 {
            return Ok(envelope.data);
        }
        let msg = if envelope.msg.is_empty() {
            FALLBACK_ERROR_MSG.to_owned()
        } else {
            envelope.msg
        };
        self.notices.error(&msg);
        if is_token_invalid(envelope.code) {
            self.session.logout();
        }
        Err(ApiError::Business {
            code: envelope.code,
            msg,
        })
    }

    /// Record a transport-level failure: notice plus the error value the
    /// caller receives.
    fn transport_failure(&self, detail: String) -> ApiError {
        self.notices
            .error(&format!("{NETWORK_ERROR_PREFIX}: {detail}"));
        ApiError::Transport(detail)
    }

    /// Transport-class failure for a success envelope missing its payload.
    fn missing_data(&self) -> ApiError {
        self.transport_failure("response missing data".to_owned())
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    /// Attach the bearer header whenever a session is active, regardless
    /// of which backend the request targets.
    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        if self.session.is_authenticated() {
            req.header("Authorization", &self.session.authorization_header())
        } else {
            req
        }
    }

    /// Decode and settle `resp`. Non-2xx responses prefer the envelope
    /// `msg` from the error body when one decodes, else fall back to the
    /// status line.
    async fn settle_response<T: DeserializeOwned>(
        &self,
        resp: Response,
    ) -> Result<Option<T>, ApiError> {
        if !resp.ok() {
            let detail = match resp.json::<ApiEnvelope<serde_json::Value>>().await {
                Ok(body) if !body.msg.is_empty() => body.msg,
                _ => status_failed_message(resp.status()),
            };
            return Err(self.transport_failure(detail));
        }
        match resp.json::<ApiEnvelope<T>>().await {
            Ok(envelope) => self.settle(envelope),
            Err(err) => Err(self.transport_failure(err.to_string())),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, ApiError> {
        let resp = self
            .with_auth(Request::get(url))
            .send()
            .await
            .map_err(|e| self.transport_failure(e.to_string()))?;
        self.settle_response(resp).await
    }

    async fn send_json<T, B>(&self, req: RequestBuilder, body: &B) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let req = self
            .with_auth(req)
            .json(body)
            .map_err(|e| self.transport_failure(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| self.transport_failure(e.to_string()))?;
        self.settle_response(resp).await
    }

    // =========================================================================
    // user-api
    // =========================================================================

    /// `POST /user/login`: exchange credentials for a token grant. Does
    /// not touch the session; see [`Self::sign_in`] for the full flow.
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send_json(Request::post(&login_endpoint()), req)
            .await?
            .ok_or_else(|| self.missing_data())
    }

    /// `POST /user/register`: create an account.
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.send_json::<serde_json::Value, _>(Request::post(&register_endpoint()), req)
            .await
            .map(|_| ())
    }

    /// `GET /user/info`: profile of the bearer token's owner.
    pub async fn fetch_user_info(&self) -> Result<UserInfo, ApiError> {
        self.get_json(&user_info_endpoint())
            .await?
            .ok_or_else(|| self.missing_data())
    }

    /// Full sign-in flow: token grant, then the profile fetched with that
    /// token explicitly, committed to the session as one unit so token
    /// and profile never diverge.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<UserInfo, ApiError> {
        let grant = self
            .login(&LoginRequest {
                username: username.to_owned(),
                password: password.to_owned(),
            })
            .await?;
        let resp = Request::get(&user_info_endpoint())
            .header("Authorization", &bearer_header(&grant.access_token))
            .send()
            .await
            .map_err(|e| self.transport_failure(e.to_string()))?;
        let user: UserInfo = self
            .settle_response(resp)
            .await?
            .ok_or_else(|| self.missing_data())?;
        self.session.login(grant.access_token, user.clone());
        Ok(user)
    }

    // =========================================================================
    // shortener-api
    // =========================================================================

    /// `GET /dashboard`: aggregate link metrics for the signed-in account.
    pub async fn fetch_dashboard(&self) -> Result<DashboardData, ApiError> {
        self.get_json(&dashboard_endpoint())
            .await?
            .ok_or_else(|| self.missing_data())
    }

    /// `GET /links`: the caller's links, paged and filtered.
    pub async fn list_links(
        &self,
        params: &ListLinksParams,
    ) -> Result<ListLinksResponse, ApiError> {
        self.get_json(&link_list_query(&links_endpoint(), params))
            .await?
            .ok_or_else(|| self.missing_data())
    }

    /// `POST /links`: create a short link.
    pub async fn create_link(&self, req: &CreateLinkRequest) -> Result<Link, ApiError> {
        self.send_json(Request::post(&links_endpoint()), req)
            .await?
            .ok_or_else(|| self.missing_data())
    }

    /// `PUT /links/{id}`: toggle or amend a link.
    pub async fn update_link(&self, id: i64, req: &UpdateLinkRequest) -> Result<Link, ApiError> {
        self.send_json(Request::put(&link_endpoint(id)), req)
            .await?
            .ok_or_else(|| self.missing_data())
    }

    /// `DELETE /links/{id}`.
    pub async fn delete_link(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .with_auth(Request::delete(&link_endpoint(id)))
            .send()
            .await
            .map_err(|e| self.transport_failure(e.to_string()))?;
        self.settle_response::<serde_json::Value>(resp)
            .await
            .map(|_| ())
    }

    // =========================================================================
    // admin
    // =========================================================================

    /// `GET /admin/users`: paged account listing, admin only.
    pub async fn list_users(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<ListUsersResponse, ApiError> {
        self.get_json(&page_query(&admin_users_endpoint(), page, page_size))
            .await?
            .ok_or_else(|| self.missing_data())
    }

    /// `GET /admin/links`: every account's links, admin only.
    pub async fn list_all_links(
        &self,
        params: &ListLinksParams,
    ) -> Result<ListLinksResponse, ApiError> {
        self.get_json(&link_list_query(&admin_links_endpoint(), params))
            .await?
            .ok_or_else(|| self.missing_data())
    }
}
