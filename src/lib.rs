//! Headless core of the shortlink administration console.
//!
//! SYSTEM CONTEXT
//! ==============
//! A rendering shell owns the widgets; this crate owns everything that
//! must behave identically however the console is drawn: the persisted
//! session, the route table and its guard, and the HTTP layer that
//! normalizes backend envelopes into unwrapped payloads, notices,
//! rejections, and forced logouts.
//!
//! Browser side effects (localStorage, history replacement, HTTP,
//! console logging) are gated behind the `hydrate` feature and no-op
//! elsewhere, so every decision path tests natively.

pub mod net;
pub mod router;
pub mod state;
pub mod util;

use crate::net::api::ApiClient;
use crate::state::notice::Notices;
use crate::state::session::Session;

/// Shared handles wired once at startup.
///
/// The session and notice handles given to the shell are the same ones
/// the API client and guard observe; there is no other copy of either.
#[derive(Clone)]
pub struct Console {
    pub session: Session,
    pub notices: Notices,
    pub api: ApiClient,
}

impl Console {
    /// Restore any persisted session and wire the shared handles.
    pub fn boot() -> Self {
        let session = Session::restore();
        let notices = Notices::default();
        let api = ApiClient::new(session.clone(), notices.clone());
        Self {
            session,
            notices,
            api,
        }
    }
}

/// Install console logging and the panic hook. Call once from the shell
/// before anything else touches the crate.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
