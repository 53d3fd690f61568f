//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `cache`, `feed`, etc.) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod cache;
pub mod context;
pub mod feed;
pub mod modal;
pub mod ui;
