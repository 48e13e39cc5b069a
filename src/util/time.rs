//! Display formatting for backend RFC3339 timestamps.
//!
//! TRADE-OFFS
//! ==========
//! The browser path converts to the viewer's local timezone through the
//! JS `Date` API; the fallback keeps the timestamp's own clock reading,
//! which is good enough for tests and non-browser builds.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Format an RFC3339 timestamp (`2023-10-27T15:04:05Z`) for table
/// display. Empty input renders as `"N/A"`; input that does not look
/// like a timestamp is returned unchanged.
pub fn format_timestamp(iso: &str) -> String {
    if iso.is_empty() {
        return "N/A".to_owned();
    }
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return fallback_format(iso);
        }
        // The sv-SE locale renders as YYYY-MM-DD HH:mm:ss.
        String::from(date.to_locale_string("sv-SE", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback_format(iso)
    }
}

/// Trim a datetime to `YYYY-MM-DD HH:mm:ss`, dropping fractional seconds
/// and any timezone suffix. No timezone conversion.
fn fallback_format(iso: &str) -> String {
    let bytes = iso.as_bytes();
    if bytes.len() >= 19 && bytes[10] == b'T' {
        let mut out = iso[..19].to_owned();
        out.replace_range(10..11, " ");
        return out;
    }
    iso.to_owned()
}
