//! Card for one blog on the listing page.
//!
//! DESIGN
//! ======
//! The card reads its blog by id from the shared [`BlogListState`] so local
//! patches after an edit re-render in place. Viewing and editing share the
//! card; edit/delete controls appear only for the author.

use leptos::prelude::*;

use crate::net::types::{Blog, Category};
use crate::state::blogs::{BlogListState, can_modify, display_content};

fn field(blog: Option<&Blog>, pick: fn(&Blog) -> &str) -> String {
    blog.map(|b| pick(b).to_owned()).unwrap_or_default()
}

/// A blog card with expand/collapse and author-only edit and delete.
#[component]
pub fn BlogCard(
    id: String,
    blogs: RwSignal<BlogListState>,
    user_id: RwSignal<Option<String>>,
    on_save: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = StoredValue::new(id);
    let blog = Memo::new(move |_| id.with_value(|id| blogs.with(|s| s.get(id).cloned())));

    let editing = move || id.with_value(|id| blogs.with(|s| s.is_editing(id)));
    let expanded = move || id.with_value(|id| blogs.with(|s| s.is_expanded(id)));
    let owned = move || {
        let user = user_id.get();
        blog.with(|b| b.as_ref().is_some_and(|b| can_modify(user.as_deref(), b)))
    };

    let title = move || blog.with(|b| field(b.as_ref(), |b| &b.title));
    let category = move || blog.with(|b| field(b.as_ref(), |b| &b.category));
    let content = move || {
        let open = expanded();
        blog.with(|b| b.as_ref().map(|b| display_content(&b.content, open)).unwrap_or_default())
    };

    let draft_title = move || blogs.with(|s| s.draft.as_ref().map(|d| d.title.clone()).unwrap_or_default());
    let draft_content = move || blogs.with(|s| s.draft.as_ref().map(|d| d.content.clone()).unwrap_or_default());
    let draft_category = move || blogs.with(|s| s.draft_category().to_owned());

    view! {
        <article class="blog-card">
            <Show
                when=editing
                fallback=move || {
                    view! {
                        <h2 class="blog-card__title">{title}</h2>
                        <p class="blog-card__category">
                            <span class="blog-card__label">"Category:"</span>
                            " "
                            {category}
                        </p>
                        <p class="blog-card__content">{content}</p>
                        <div class="blog-card__actions">
                            <button
                                class="blog-card__toggle"
                                on:click=move |_| id.with_value(|id| blogs.update(|s| s.toggle_expanded(id)))
                            >
                                {move || if expanded() { "Read Less" } else { "Read More" }}
                            </button>
                            <Show when=owned>
                                <button
                                    class="blog-card__edit"
                                    on:click=move |_| {
                                        id.with_value(|id| blogs.update(|s| {
                                            s.begin_edit(id);
                                        }));
                                    }
                                >
                                    "Edit"
                                </button>
                                <button class="blog-card__delete" on:click=move |_| on_delete.run(id.get_value())>
                                    "Delete"
                                </button>
                            </Show>
                        </div>
                    }
                }
            >
                <input
                    class="blog-card__input"
                    type="text"
                    placeholder="Edit title"
                    prop:value=draft_title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        blogs.update(|s| s.edit_draft(|d| d.title = value));
                    }
                />
                <select
                    class="blog-card__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        blogs.update(|s| s.edit_draft(|d| d.category = value));
                    }
                >
                    {Category::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <option value=c.as_str() selected=move || c.is_selected(&draft_category())>
                                    {c.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <textarea
                    class="blog-card__textarea"
                    prop:value=draft_content
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        blogs.update(|s| s.edit_draft(|d| d.content = value));
                    }
                ></textarea>
                <div class="blog-card__actions">
                    <button class="btn btn--save" on:click=move |_| on_save.run(id.get_value())>
                        "Save"
                    </button>
                    <button class="btn btn--cancel" on:click=move |_| blogs.update(BlogListState::cancel_edit)>
                        "Cancel"
                    </button>
                </div>
            </Show>
        </article>
    }
}
