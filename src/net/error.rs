//! Failure taxonomy and reserved business codes.
//!
//! ERROR HANDLING
//! ==============
//! Business failures keep the backend's own message; transport failures
//! are prefixed so the shell can tell connectivity problems from rejected
//! operations. Reserved codes additionally invalidate the session before
//! the error ever reaches the caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// user-api reserved code: the bearer token is no longer valid.
pub const CODE_USER_TOKEN_INVALID: i64 = 10005;

/// shortener-api reserved code: the bearer token is no longer valid.
pub const CODE_SHORTENER_TOKEN_INVALID: i64 = 11001;

/// Reserved codes that force a logout, one per backend subsystem.
pub const TOKEN_INVALID_CODES: &[i64] = &[CODE_USER_TOKEN_INVALID, CODE_SHORTENER_TOKEN_INVALID];

/// Whether `code` means the session token is no longer valid.
pub fn is_token_invalid(code: i64) -> bool {
    TOKEN_INVALID_CODES.contains(&code)
}

/// Failure surfaced to callers of the HTTP layer.
///
/// By the time a caller sees one of these, the user-visible side effects
/// (error notice, forced logout on reserved codes) have already been
/// applied; call sites only handle local reactions such as inline form
/// errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Nonzero envelope code from an otherwise successful HTTP exchange.
    #[error("{msg}")]
    Business { code: i64, msg: String },

    /// Non-2xx status, network failure, or an undecodable body.
    #[error("network error: {0}")]
    Transport(String),
}
