//! Imperative navigation side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard and the session store both force redirects from outside any
//! rendering framework. Replacing the history entry keeps authenticated
//! views unreachable through back-navigation after a redirect.

/// Replace the current history entry with `path`.
pub fn replace_path(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().replace(path).is_err() {
            log::warn!("nav: history replace to {path} failed");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
