//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `blogs`, `forms`) so pages and
//! components depend on small focused models that can be tested without a
//! browser.

pub mod blogs;
pub mod forms;
pub mod session;
