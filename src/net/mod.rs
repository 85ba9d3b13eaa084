//! Networking modules for the remote authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two auth calls, `types` defines the request payloads.

pub mod api;
pub mod types;
