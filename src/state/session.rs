//! Session state: the single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard and the HTTP layer both read this cell; only
//! `login`, `logout`, and the interceptor's invalid-token teardown write
//! it. Every mutation is persisted so a page reload restores the session.
//! No expiry runs client-side; the backend rejects stale tokens with a
//! reserved envelope code and the HTTP layer calls `logout` in response.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::net::types::UserInfo;
use crate::router::routes::LOGIN_PATH;
use crate::util::{nav, persist};

/// localStorage key holding the serialized [`SessionState`].
pub const SESSION_STORAGE_KEY: &str = "shortlink_console_session";

/// Role string that unlocks the admin-only views.
pub const ADMIN_ROLE: &str = "admin";

const BEARER_SCHEME: &str = "Bearer";

/// Build the `Authorization` header value carrying `token`.
pub fn bearer_header(token: &str) -> String {
    format!("{BEARER_SCHEME} {token}")
}

/// Persisted session fields: the access token and the profile it belongs to.
///
/// `token` and `user` are set and cleared together by [`Session::login`]
/// and [`Session::logout`]. A restored store may carry a stale token with
/// no profile; the predicates tolerate that boundary state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl SessionState {
    /// Whether a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Whether an authenticated session's profile carries the admin role.
    /// Always false while unauthenticated, whatever the stored profile says.
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(|u| u.role == ADMIN_ROLE)
    }

    /// `Authorization` header value for the current token. Callers must
    /// check [`Self::is_authenticated`] first; without a token the result
    /// is a malformed header, not an error.
    pub fn authorization_header(&self) -> String {
        bearer_header(self.token.as_deref().unwrap_or_default())
    }
}

/// Cheaply cloneable handle to the shared session cell.
///
/// Constructed once at boot and handed to the guard and the API client;
/// clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Rc<RefCell<SessionState>>,
}

impl Session {
    /// Restore the session persisted under [`SESSION_STORAGE_KEY`], or
    /// start signed out.
    pub fn restore() -> Self {
        let state = persist::load_json(SESSION_STORAGE_KEY).unwrap_or_default();
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    /// Unconditionally overwrite both token and profile, then persist.
    /// The token is stored as-is; format validation is the backend's job.
    pub fn login(&self, token: String, user: UserInfo) {
        {
            let mut state = self.inner.borrow_mut();
            state.token = Some(token);
            state.user = Some(user);
        }
        self.save();
    }

    /// Clear both fields, persist the signed-out state, and force a
    /// redirect to the login page. The redirect replaces the current
    /// history entry so back-navigation cannot land on a protected view.
    pub fn logout(&self) {
        {
            let mut state = self.inner.borrow_mut();
            state.token = None;
            state.user = None;
        }
        self.save();
        nav::replace_path(LOGIN_PATH);
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.inner.borrow().is_admin()
    }

    pub fn authorization_header(&self) -> String {
        self.inner.borrow().authorization_header()
    }

    /// Clone of the current state for pure guard evaluation.
    pub fn snapshot(&self) -> SessionState {
        self.inner.borrow().clone()
    }

    fn save(&self) {
        persist::save_json(SESSION_STORAGE_KEY, &*self.inner.borrow());
    }
}
