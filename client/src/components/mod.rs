//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session and listing state from Leptos context or
//! props and leave network calls to the page that owns them.

pub mod blog_card;
pub mod navbar;
