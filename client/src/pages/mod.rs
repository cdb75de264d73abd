//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and network work to `util`.

pub mod blog;
pub mod login;
pub mod signup;
