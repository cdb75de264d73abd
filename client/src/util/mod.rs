//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules hold the page flows (validate, call, interpret, update
//! state) as plain async functions over a transport and a session store, so
//! pages only wire signals to them.

pub mod auth;
pub mod blog_actions;
