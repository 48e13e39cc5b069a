//! Pre-navigation authorization guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rendering shell forwards every route transition here before
//! committing it. `decide` is a pure function of the destination and a
//! session snapshot; `before_each` applies the redirect and notice side
//! effects at the boundary. Guard outcomes never escalate to errors;
//! denial is always a redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::router::routes::{self, DASHBOARD_PATH, LOGIN_PATH};
use crate::state::notice::Notices;
use crate::state::session::{Session, SessionState};
use crate::util::nav;

/// Notice shown when a non-admin session hits an admin-only route.
pub const FORBIDDEN_NOTICE: &str = "access denied: administrator role required";

/// Outcome of evaluating a route transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Proceed to the destination.
    Allow,
    /// Silent redirect (authentication flow).
    RedirectTo(&'static str),
    /// Redirect plus a user-visible notice (authorization denial).
    RedirectWithNotice(&'static str, &'static str),
}

/// Decide a transition to `to_path`. Checks run in a fixed order and the
/// first match wins. The admin check is only reachable once the
/// authentication checks have passed, so an unauthenticated hit on an
/// admin route redirects to login without a forbidden notice.
pub fn decide(to_path: &str, session: &SessionState) -> Decision {
    let public = routes::is_public(to_path);
    if !public && !session.is_authenticated() {
        return Decision::RedirectTo(LOGIN_PATH);
    }
    if to_path == LOGIN_PATH && session.is_authenticated() {
        return Decision::RedirectTo(DASHBOARD_PATH);
    }
    if routes::requires_admin(to_path) && !session.is_admin() {
        return Decision::RedirectWithNotice(DASHBOARD_PATH, FORBIDDEN_NOTICE);
    }
    Decision::Allow
}

/// Navigation-surface adapter: evaluate a `(to, from)` transition and
/// apply exactly one outcome. Returns the redirect target, or `None`
/// when the transition may proceed. `from` is accepted for surface
/// compatibility and not consulted.
pub fn before_each(
    to: &str,
    _from: &str,
    session: &Session,
    notices: &Notices,
) -> Option<&'static str> {
    match decide(to, &session.snapshot()) {
        Decision::Allow => None,
        Decision::RedirectTo(target) => {
            nav::replace_path(target);
            Some(target)
        }
        Decision::RedirectWithNotice(target, message) => {
            notices.error(message);
            nav::replace_path(target);
            Some(target)
        }
    }
}
