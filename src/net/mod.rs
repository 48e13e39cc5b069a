//! HTTP layer: wire schema, failure taxonomy, and the envelope client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` mirrors the two backend wire formats, `error` classifies
//! failures, and `api` is the client that attaches credentials on the way
//! out and settles business envelopes on the way in.

pub mod api;
pub mod error;
pub mod types;
