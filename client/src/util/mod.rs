//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod clock;
pub mod dates;
pub mod debounce;
pub mod pagination;
pub mod session;
pub mod tags;
pub mod theme;
