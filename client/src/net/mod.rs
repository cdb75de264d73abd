//! Networking modules for the remote blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` abstracts the request/response round trip, `api` builds endpoint
//! requests and interprets responses, `error` defines the failure taxonomy,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
