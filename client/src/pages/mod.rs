//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Signed-in pages wrap themselves in `layout::AuthedShell`.

pub mod feed;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod patient;
pub mod profile;
pub mod register;
