//! Networking modules for the records REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies failures, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
