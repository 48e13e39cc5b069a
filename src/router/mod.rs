//! Route table and pre-navigation authorization guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` declares the console's navigable surface once, statically;
//! `guard` decides every transition against it using a session snapshot.

pub mod guard;
pub mod routes;
