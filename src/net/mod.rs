//! Networking modules for the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and `types` defines the JSON schema shared with
//! the auth service.

pub mod api;
pub mod types;
