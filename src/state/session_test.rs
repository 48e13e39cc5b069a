use super::*;

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

fn authed(role: &str) -> SessionState {
    SessionState {
        token: Some("tok-1".to_owned()),
        user: Some(make_user(role)),
    }
}

// =============================================================
// Predicates
// =============================================================

#[test]
fn default_state_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = SessionState {
        token: Some(String::new()),
        user: None,
    };
    assert!(!state.is_authenticated());
}

#[test]
fn non_empty_token_is_authenticated() {
    assert!(authed("user").is_authenticated());
}

#[test]
fn admin_requires_admin_role() {
    assert!(authed("admin").is_admin());
    assert!(!authed("user").is_admin());
}

#[test]
fn is_admin_never_true_while_unauthenticated() {
    // Even a tampered store holding an admin profile without a token
    // must not grant admin.
    let state = SessionState {
        token: None,
        user: Some(make_user("admin")),
    };
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn stale_token_without_profile_is_authenticated_non_admin() {
    let state = SessionState {
        token: Some("stale".to_owned()),
        user: None,
    };
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

// =============================================================
// Authorization header
// =============================================================

#[test]
fn authorization_header_uses_bearer_scheme() {
    assert_eq!(authed("user").authorization_header(), "Bearer tok-1");
}

#[test]
fn authorization_header_without_token_is_malformed_not_error() {
    assert_eq!(SessionState::default().authorization_header(), "Bearer ");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_sets_both_fields() {
    let session = Session::default();
    session.login("tok-1".to_owned(), make_user("user"));
    let state = session.snapshot();
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user, Some(make_user("user")));
}

#[test]
fn login_overwrites_previous_session() {
    let session = Session::default();
    session.login("tok-1".to_owned(), make_user("user"));
    session.login("tok-2".to_owned(), make_user("admin"));
    let state = session.snapshot();
    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert!(state.is_admin());
}

#[test]
fn logout_clears_both_fields() {
    let session = Session::default();
    session.login("tok-1".to_owned(), make_user("admin"));
    session.logout();
    assert_eq!(session.snapshot(), SessionState::default());
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn clones_share_state() {
    let session = Session::default();
    let other = session.clone();
    session.login("tok-1".to_owned(), make_user("user"));
    assert!(other.is_authenticated());
    other.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn snapshot_is_detached_from_later_mutations() {
    let session = Session::default();
    session.login("tok-1".to_owned(), make_user("user"));
    let snapshot = session.snapshot();
    session.logout();
    assert!(snapshot.is_authenticated());
}

// =============================================================
// Persistence round-trips
// =============================================================

#[test]
fn login_state_round_trips_through_json() {
    let session = Session::default();
    session.login("tok-1".to_owned(), make_user("admin"));
    let raw = serde_json::to_string(&session.snapshot()).unwrap();
    let restored: SessionState = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, session.snapshot());
}

#[test]
fn logout_state_round_trips_to_signed_out() {
    let session = Session::default();
    session.login("tok-1".to_owned(), make_user("user"));
    session.logout();
    let raw = serde_json::to_string(&session.snapshot()).unwrap();
    let restored: SessionState = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored.token, None);
    assert_eq!(restored.user, None);
}

#[test]
fn storage_key_is_stable() {
    // Persisted sessions survive releases only if this key never moves.
    assert_eq!(SESSION_STORAGE_KEY, "shortlink_console_session");
}
