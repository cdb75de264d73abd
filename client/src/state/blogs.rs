//! Blog listing page state.
//!
//! DESIGN
//! ======
//! The list is a transient copy of the API's data: replaced wholesale on each
//! fetch, patched in place on edit, and pruned on delete. Expansion is a set
//! of ids so each card toggles independently; at most one card holds an
//! edit draft at a time.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use std::collections::HashSet;

use crate::net::types::{Blog, BlogUpdate};

/// Characters of content shown while a card is collapsed.
pub const EXCERPT_CHARS: usize = 100;

/// In-progress edit of one blog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub blog_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
}

impl EditDraft {
    #[must_use]
    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            blog_id: blog.id.clone(),
            title: blog.title.clone(),
            content: blog.content.clone(),
            category: blog.category.clone(),
        }
    }

    #[must_use]
    pub fn to_update(&self) -> BlogUpdate {
        BlogUpdate { content: self.content.clone(), title: self.title.clone(), category: self.category.clone() }
    }
}

/// Listing page state shared by the page and its cards.
#[derive(Clone, Debug, Default)]
pub struct BlogListState {
    pub items: Vec<Blog>,
    pub expanded: HashSet<String>,
    pub draft: Option<EditDraft>,
    pub error: Option<String>,
    pub loading: bool,
}

impl BlogListState {
    #[must_use]
    pub fn with_items(items: Vec<Blog>) -> Self {
        Self { items, ..Self::default() }
    }

    /// Replace the whole list. Expansion and draft state for ids that are no
    /// longer listed is dropped.
    pub fn replace_items(&mut self, items: Vec<Blog>) {
        self.items = items;
        let ids: HashSet<&str> = self.items.iter().map(|b| b.id.as_str()).collect();
        self.expanded.retain(|id| ids.contains(id.as_str()));
        if self.draft.as_ref().is_some_and(|d| !ids.contains(d.blog_id.as_str())) {
            self.draft = None;
        }
    }

    #[must_use]
    pub fn get(&self, blog_id: &str) -> Option<&Blog> {
        self.items.iter().find(|b| b.id == blog_id)
    }

    pub fn toggle_expanded(&mut self, blog_id: &str) {
        if !self.expanded.remove(blog_id) {
            self.expanded.insert(blog_id.to_owned());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, blog_id: &str) -> bool {
        self.expanded.contains(blog_id)
    }

    /// Start editing `blog_id`, replacing any other draft. Returns `false` if
    /// the id is not listed.
    pub fn begin_edit(&mut self, blog_id: &str) -> bool {
        match self.get(blog_id).map(EditDraft::from_blog) {
            Some(draft) => {
                self.draft = Some(draft);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    #[must_use]
    pub fn is_editing(&self, blog_id: &str) -> bool {
        self.draft.as_ref().is_some_and(|d| d.blog_id == blog_id)
    }

    /// Category of the open draft; empty when nothing is being edited.
    #[must_use]
    pub fn draft_category(&self) -> &str {
        self.draft.as_ref().map_or("", |d| d.category.as_str())
    }

    /// Mutate the open draft, if any.
    pub fn edit_draft(&mut self, f: impl FnOnce(&mut EditDraft)) {
        if let Some(draft) = self.draft.as_mut() {
            f(draft);
        }
    }

    /// Apply a saved edit to the matching entry only, and close its draft.
    pub fn apply_update(&mut self, blog_id: &str, update: &BlogUpdate) -> bool {
        let Some(blog) = self.items.iter_mut().find(|b| b.id == blog_id) else {
            return false;
        };
        blog.title.clone_from(&update.title);
        blog.content.clone_from(&update.content);
        blog.category.clone_from(&update.category);
        if self.is_editing(blog_id) {
            self.draft = None;
        }
        true
    }

    /// Drop a deleted entry along with its expansion and draft state.
    pub fn remove(&mut self, blog_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|b| b.id != blog_id);
        self.expanded.remove(blog_id);
        if self.is_editing(blog_id) {
            self.draft = None;
        }
        self.items.len() != before
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// First [`EXCERPT_CHARS`] characters followed by `...`.
#[must_use]
pub fn excerpt(content: &str) -> String {
    let cut = content.char_indices().nth(EXCERPT_CHARS).map_or(content.len(), |(i, _)| i);
    format!("{}...", &content[..cut])
}

/// Content as displayed on a card in the given expansion state.
#[must_use]
pub fn display_content(content: &str, expanded: bool) -> String {
    if expanded { content.to_owned() } else { excerpt(content) }
}

/// Whether edit/delete controls are shown: the stored user id must be
/// non-empty and equal the blog's author. Display only; the API enforces
/// ownership.
#[must_use]
pub fn can_modify(user_id: Option<&str>, blog: &Blog) -> bool {
    user_id.is_some_and(|id| !id.is_empty() && id == blog.author_id)
}
