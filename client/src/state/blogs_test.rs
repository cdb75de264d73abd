use super::*;
use crate::net::types::Category;

fn blog(id: &str, author: &str, title: &str, content: &str, category: &str) -> Blog {
    Blog {
        id: id.to_owned(),
        title: title.to_owned(),
        content: content.to_owned(),
        author_id: author.to_owned(),
        category: category.to_owned(),
        created_at: None,
        updated_at: None,
    }
}

fn three() -> BlogListState {
    BlogListState::with_items(vec![
        blog("1", "u1", "A", "alpha", "Sports"),
        blog("2", "u2", "B", "beta", "Nature"),
        blog("3", "u1", "C", "gamma", "Technology"),
    ])
}

// =============================================================
// Expansion
// =============================================================

#[test]
fn toggle_is_independent_per_item() {
    let mut state = three();
    state.toggle_expanded("1");
    state.toggle_expanded("2");
    state.toggle_expanded("1");
    assert!(!state.is_expanded("1"));
    assert!(state.is_expanded("2"));
    assert!(!state.is_expanded("3"));
}

#[test]
fn replace_items_prunes_stale_expansion_and_draft() {
    let mut state = three();
    state.toggle_expanded("1");
    state.toggle_expanded("3");
    assert!(state.begin_edit("3"));
    state.replace_items(vec![blog("1", "u1", "A", "alpha", "Sports")]);
    assert!(state.is_expanded("1"));
    assert!(!state.expanded.contains("3"));
    assert!(state.draft.is_none());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn draft_category_selects_the_blog_category_then_follows_edits() {
    let mut state = three();
    assert_eq!(state.draft_category(), "");
    assert!(state.begin_edit("2"));
    assert_eq!(state.draft_category(), "Nature");
    let selected: Vec<Category> =
        Category::ALL.into_iter().filter(|c| c.is_selected(state.draft_category())).collect();
    assert_eq!(selected, vec![Category::Nature]);

    state.edit_draft(|d| d.category = Category::Sports.as_str().to_owned());
    assert_eq!(state.draft_category(), "Sports");
    assert!(Category::Sports.is_selected(state.draft_category()));
    assert!(!Category::Nature.is_selected(state.draft_category()));
}

#[test]
fn begin_edit_loads_current_fields() {
    let mut state = three();
    assert!(state.begin_edit("2"));
    assert_eq!(
        state.draft,
        Some(EditDraft {
            blog_id: "2".to_owned(),
            title: "B".to_owned(),
            content: "beta".to_owned(),
            category: "Nature".to_owned(),
        })
    );
}

#[test]
fn only_one_item_is_edited_at_a_time() {
    let mut state = three();
    state.begin_edit("1");
    state.begin_edit("3");
    assert!(!state.is_editing("1"));
    assert!(state.is_editing("3"));
}

#[test]
fn begin_edit_unknown_id_keeps_existing_draft() {
    let mut state = three();
    state.begin_edit("1");
    assert!(!state.begin_edit("missing"));
    assert!(state.is_editing("1"));
}

#[test]
fn cancel_discards_draft_without_touching_items() {
    let mut state = three();
    state.begin_edit("1");
    state.edit_draft(|d| d.title = "changed".to_owned());
    state.cancel_edit();
    assert!(state.draft.is_none());
    assert_eq!(state.get("1").unwrap().title, "A");
}

#[test]
fn apply_update_changes_only_target_entry() {
    let mut state = three();
    state.begin_edit("2");
    let before = state.items.clone();
    let update = BlogUpdate { content: "new".to_owned(), title: "B2".to_owned(), category: "Sports".to_owned() };
    assert!(state.apply_update("2", &update));

    let edited = state.get("2").unwrap();
    assert_eq!((edited.title.as_str(), edited.content.as_str(), edited.category.as_str()), ("B2", "new", "Sports"));
    assert_eq!(state.items[0], before[0]);
    assert_eq!(state.items[2], before[2]);
    assert!(state.draft.is_none());
}

#[test]
fn apply_update_for_other_item_keeps_open_draft() {
    let mut state = three();
    state.begin_edit("1");
    let update = BlogUpdate { content: "x".to_owned(), title: "y".to_owned(), category: "Nature".to_owned() };
    state.apply_update("3", &update);
    assert!(state.is_editing("1"));
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_drops_exactly_one_entry() {
    let mut state = three();
    state.toggle_expanded("2");
    state.begin_edit("2");
    assert!(state.remove("2"));
    assert_eq!(state.items.len(), 2);
    assert!(state.get("2").is_none());
    assert!(!state.is_expanded("2"));
    assert!(state.draft.is_none());
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut state = three();
    assert!(!state.remove("9"));
    assert_eq!(state.items.len(), 3);
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn collapsed_view_shows_first_hundred_chars_and_ellipsis() {
    let content = "x".repeat(150);
    assert_eq!(display_content(&content, false), format!("{}...", "x".repeat(100)));
    assert_eq!(display_content(&content, true), content);
}

#[test]
fn excerpt_of_short_content_still_appends_ellipsis() {
    assert_eq!(excerpt("short"), "short...");
    assert_eq!(excerpt(""), "...");
}

#[test]
fn excerpt_counts_characters_not_bytes() {
    let content = "é".repeat(120);
    let shown = excerpt(&content);
    assert_eq!(shown.chars().count(), 103);
    assert!(shown.starts_with(&"é".repeat(100)));
}

#[test]
fn controls_visible_only_for_matching_author() {
    let b = blog("1", "u1", "A", &"x".repeat(150), "Sports");
    assert!(can_modify(Some("u1"), &b));
    assert!(!can_modify(Some("u2"), &b));
    assert!(!can_modify(Some(""), &b));
    assert!(!can_modify(None, &b));
}

#[test]
fn empty_author_never_matches_empty_user() {
    let b = blog("1", "", "A", "x", "Sports");
    assert!(!can_modify(Some(""), &b));
}
