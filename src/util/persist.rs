//! Browser localStorage glue for durable client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store serializes itself here on every mutation and reads
//! itself back at boot. Centralizing the web-sys plumbing keeps state
//! modules natively testable; outside the browser every helper is a no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read and deserialize the JSON value stored under `key`, if any.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Serialize `value` as JSON under `key`. Storage failures are swallowed;
/// persistence is best-effort and never blocks the mutation itself.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        match serde_json::to_string(value) {
            Ok(raw) => {
                let _ = storage.set_item(key, &raw);
            }
            Err(err) => log::warn!("persist: serialize failed for {key}: {err}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
