//! Client-side state shared by the guard, the HTTP layer, and the shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single authorization source of truth; `notice` is the
//! queue of user-visible messages the shell renders as toasts.

pub mod notice;
pub mod session;
