//! Listing page operations: search, save edit, delete.
//!
//! Each operation is split into an async call returning an outcome and a
//! synchronous `apply_*` that folds the outcome into [`BlogListState`]. The
//! page awaits the first inside `spawn_local` and runs the second inside a
//! signal update. Failures only ever set the page error.

#[cfg(test)]
#[path = "blog_actions_test.rs"]
mod blog_actions_test;

use crate::net::api::{self, ApiConfig};
use crate::net::http::HttpTransport;
use crate::net::types::{Blog, BlogQuery, BlogUpdate};
use crate::state::blogs::{BlogListState, EditDraft};
use crate::state::session::{SessionStore, stored_token};

pub const SEARCH_FAILED: &str = "Failed to load blogs";
pub const UPDATE_FAILED: &str = "Failed to update blog";
pub const DELETE_FAILED: &str = "Failed to delete blog";

/// Reset page feedback before an operation starts.
pub fn begin(state: &mut BlogListState) {
    state.clear_error();
}

/// Fetch the filtered list.
///
/// # Errors
///
/// Returns the message to display.
pub async fn search<T: HttpTransport>(transport: &T, config: &ApiConfig, query: &BlogQuery) -> Result<Vec<Blog>, String> {
    api::search_blogs(transport, config, query).await.map_err(|e| {
        log::warn!("blog search failed: {e}");
        e.display_message(SEARCH_FAILED)
    })
}

/// Replace the list on success; keep it untouched on failure.
pub fn apply_search(state: &mut BlogListState, outcome: Result<Vec<Blog>, String>) {
    state.loading = false;
    match outcome {
        Ok(items) => state.replace_items(items),
        Err(message) => state.set_error(message),
    }
}

/// PATCH the draft using the stored token.
///
/// # Errors
///
/// Returns `"User is not authenticated"` without a call when no token is
/// stored, otherwise the message to display.
pub async fn save_edit<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    store: &dyn SessionStore,
    draft: &EditDraft,
) -> Result<BlogUpdate, String> {
    let update = draft.to_update();
    let token = stored_token(store);
    api::update_blog(transport, config, token.as_deref(), &draft.blog_id, &update)
        .await
        .map_err(|e| {
            log::warn!("blog update failed for {}: {e}", draft.blog_id);
            e.display_message(UPDATE_FAILED)
        })?;
    Ok(update)
}

/// Patch the entry and close the draft on success; keep the draft on failure.
pub fn apply_save(state: &mut BlogListState, blog_id: &str, outcome: Result<BlogUpdate, String>) {
    match outcome {
        Ok(update) => {
            state.apply_update(blog_id, &update);
        }
        Err(message) => state.set_error(message),
    }
}

/// DELETE a blog using the stored token.
///
/// # Errors
///
/// Same contract as [`save_edit`].
pub async fn delete<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    store: &dyn SessionStore,
    blog_id: &str,
) -> Result<(), String> {
    let token = stored_token(store);
    api::delete_blog(transport, config, token.as_deref(), blog_id).await.map_err(|e| {
        log::warn!("blog delete failed for {blog_id}: {e}");
        e.display_message(DELETE_FAILED)
    })
}

/// Remove the entry on success.
pub fn apply_delete(state: &mut BlogListState, blog_id: &str, outcome: Result<(), String>) {
    match outcome {
        Ok(()) => {
            state.remove(blog_id);
        }
        Err(message) => state.set_error(message),
    }
}
