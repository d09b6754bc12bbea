//! Networking: REST helpers and the wire types they exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the payload schema shared
//! with the server through the `wellness` crate.

pub mod api;
pub mod types;
