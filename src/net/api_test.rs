use super::*;

use crate::net::types::UserInfo;
use crate::state::notice::NoticeLevel;

// =============================================================
// Helpers
// =============================================================

fn make_user(role: &str) -> UserInfo {
    UserInfo {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: role.to_owned(),
        created_at: "2024-05-01T09:30:00Z".to_owned(),
    }
}

fn make_client() -> (ApiClient, Session, Notices) {
    let session = Session::default();
    let notices = Notices::default();
    let client = ApiClient::new(session.clone(), notices.clone());
    (client, session, notices)
}

fn make_authed_client(role: &str) -> (ApiClient, Session, Notices) {
    let (client, session, notices) = make_client();
    session.login("tok-1".to_owned(), make_user(role));
    (client, session, notices)
}

fn envelope<T>(code: i64, msg: &str, data: Option<T>) -> ApiEnvelope<T> {
    ApiEnvelope {
        code,
        msg: msg.to_owned(),
        data,
    }
}

// =============================================================
// Envelope settlement: success
// =============================================================

#[test]
fn settle_success_unwraps_data_without_notice() {
    let (client, _session, notices) = make_client();
    let result = client.settle(envelope(0, "", Some(serde_json::json!({"x": 1}))));
    assert_eq!(result.unwrap(), Some(serde_json::json!({"x": 1})));
    assert!(notices.is_empty());
}

#[test]
fn settle_success_passes_through_missing_data() {
    let (client, _session, notices) = make_client();
    let result = client.settle::<serde_json::Value>(envelope(0, "", None));
    assert_eq!(result.unwrap(), None);
    assert!(notices.is_empty());
}

// =============================================================
// Envelope settlement: business failure
// =============================================================

#[test]
fn settle_business_error_notifies_and_rejects() {
    let (client, session, notices) = make_authed_client("user");
    let result = client.settle::<serde_json::Value>(envelope(40000, "bad input", None));
    assert_eq!(
        result.unwrap_err(),
        ApiError::Business {
            code: 40000,
            msg: "bad input".to_owned(),
        }
    );
    let drained = notices.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].level, NoticeLevel::Error);
    assert_eq!(drained[0].message, "bad input");
    // Generic business failures leave the session alone.
    assert!(session.is_authenticated());
}

#[test]
fn settle_empty_message_falls_back() {
    let (client, _session, notices) = make_authed_client("user");
    let err = client
        .settle::<serde_json::Value>(envelope(40000, "", None))
        .unwrap_err();
    assert_eq!(err.to_string(), "request failed");
    assert_eq!(notices.drain()[0].message, "request failed");
}

#[test]
fn settle_user_token_invalid_logs_out() {
    let (client, session, notices) = make_authed_client("user");
    let err = client
        .settle::<serde_json::Value>(envelope(10005, "token invalid", None))
        .unwrap_err();
    assert_eq!(err.to_string(), "token invalid");
    assert!(notices.drain()[0].message.contains("token invalid"));
    assert!(!session.is_authenticated());
    assert_eq!(session.snapshot().user, None);
}

#[test]
fn settle_shortener_token_invalid_logs_out() {
    let (client, session, _notices) = make_authed_client("admin");
    let result = client.settle::<serde_json::Value>(envelope(11001, "token expired", None));
    assert!(result.is_err());
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn settle_notifies_before_rejecting() {
    // The notice must be queued by the time the caller sees the Err.
    let (client, _session, notices) = make_authed_client("user");
    let result = client.settle::<serde_json::Value>(envelope(40000, "bad input", None));
    assert!(result.is_err());
    assert!(!notices.is_empty());
}

// =============================================================
// Transport failures
// =============================================================

#[test]
fn transport_failure_prefixes_notice_and_error() {
    let (client, _session, notices) = make_client();
    let err = client.transport_failure("connection refused".to_owned());
    assert_eq!(err, ApiError::Transport("connection refused".to_owned()));
    assert_eq!(err.to_string(), "network error: connection refused");
    let drained = notices.drain();
    assert_eq!(drained[0].level, NoticeLevel::Error);
    assert_eq!(drained[0].message, "network error: connection refused");
}

#[test]
fn missing_data_is_transport_class() {
    let (client, _session, notices) = make_client();
    let err = client.missing_data();
    assert_eq!(err, ApiError::Transport("response missing data".to_owned()));
    assert!(notices.drain()[0].message.starts_with("network error: "));
}

#[test]
fn status_failed_message_includes_status() {
    assert_eq!(status_failed_message(500), "request failed: 500");
    assert_eq!(status_failed_message(404), "request failed: 404");
}

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn endpoints_live_under_the_api_prefix() {
    assert_eq!(login_endpoint(), "/api/v1/user/login");
    assert_eq!(register_endpoint(), "/api/v1/user/register");
    assert_eq!(user_info_endpoint(), "/api/v1/user/info");
    assert_eq!(dashboard_endpoint(), "/api/v1/dashboard");
    assert_eq!(links_endpoint(), "/api/v1/links");
    assert_eq!(link_endpoint(7), "/api/v1/links/7");
    assert_eq!(admin_users_endpoint(), "/api/v1/admin/users");
    assert_eq!(admin_links_endpoint(), "/api/v1/admin/links");
}

#[test]
fn link_list_query_formats_paging_and_status() {
    let params = ListLinksParams {
        page: 2,
        page_size: 50,
        status: "active".to_owned(),
    };
    assert_eq!(
        link_list_query("/api/v1/links", &params),
        "/api/v1/links?page=2&pageSize=50&status=active"
    );
}

#[test]
fn page_query_formats_paging() {
    assert_eq!(
        page_query("/api/v1/admin/users", 1, 20),
        "/api/v1/admin/users?page=1&pageSize=20"
    );
}
