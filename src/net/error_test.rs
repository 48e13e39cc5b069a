use super::*;

// =============================================================
// Reserved codes
// =============================================================

#[test]
fn user_api_token_code_is_reserved() {
    assert!(is_token_invalid(CODE_USER_TOKEN_INVALID));
}

#[test]
fn shortener_api_token_code_is_reserved() {
    assert!(is_token_invalid(CODE_SHORTENER_TOKEN_INVALID));
}

#[test]
fn other_codes_are_not_reserved() {
    assert!(!is_token_invalid(0));
    assert!(!is_token_invalid(40000));
    assert!(!is_token_invalid(10004));
    assert!(!is_token_invalid(11002));
}

#[test]
fn reserved_list_covers_both_subsystems() {
    assert_eq!(TOKEN_INVALID_CODES, &[10005, 11001]);
}

// =============================================================
// Display
// =============================================================

#[test]
fn business_display_is_the_backend_message() {
    let err = ApiError::Business {
        code: 40000,
        msg: "short code already taken".to_owned(),
    };
    assert_eq!(err.to_string(), "short code already taken");
}

#[test]
fn transport_display_is_prefixed() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}
