//! Blog listing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The first page of results is loaded during SSR through [`load_blogs`] and
//! arrives in the browser with the hydrated HTML. Everything after that
//! (re-search, edit, delete) runs in the browser against the remote API and
//! folds its outcome into one `RwSignal<BlogListState>`.
//!
//! TRADE-OFFS
//! ==========
//! Edits and deletes patch the local list instead of re-fetching, so another
//! author's concurrent change stays invisible until the next search.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use serde::{Deserialize, Serialize};

use crate::components::blog_card::BlogCard;
use crate::net::api::ApiConfig;
use crate::net::types::{Blog, BlogQuery, Category};
use crate::state::blogs::BlogListState;
use crate::state::session::SessionContext;
use crate::util::blog_actions;

/// Result of the server-side initial load. Failures travel as a display
/// message so the page can still render an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialBlogs {
    pub blogs: Vec<Blog>,
    pub error: Option<String>,
}

impl InitialBlogs {
    #[must_use]
    pub fn into_state(self) -> BlogListState {
        let mut state = BlogListState::with_items(self.blogs);
        if let Some(error) = self.error {
            state.set_error(error);
        }
        state
    }
}

/// Build the listing filter from the page's `search` / `category` query
/// parameters.
#[must_use]
pub fn query_from_params(search: Option<String>, category: Option<String>) -> BlogQuery {
    BlogQuery::new(search.unwrap_or_default(), category.unwrap_or_default())
}

/// Fetch the filtered listing from the remote API on the server.
///
/// # Errors
///
/// Only fails when the outbound HTTP client cannot be built; API failures
/// are reported through [`InitialBlogs::error`].
#[server]
pub async fn load_blogs(query: BlogQuery) -> Result<InitialBlogs, ServerFnError> {
    use crate::net::http::ReqwestTransport;

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_env);
    let transport = match use_context::<ReqwestTransport>() {
        Some(transport) => transport,
        None => match ReqwestTransport::with_defaults() {
            Ok(transport) => transport,
            Err(e) => return Err(ServerFnError::new(e)),
        },
    };

    match crate::net::api::search_blogs(&transport, &config, &query).await {
        Ok(blogs) => Ok(InitialBlogs { blogs, error: None }),
        Err(e) => {
            tracing::warn!(error = %e, search = %query.search, category = %query.category, "initial blog load failed");
            Ok(InitialBlogs { blogs: Vec::new(), error: Some(e.display_message(blog_actions::SEARCH_FAILED)) })
        }
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ApiConfig>();
    let params = use_query_map();

    let query = move || params.with(|p| query_from_params(p.get("search"), p.get("category")));
    let initial_query = params.with_untracked(|p| query_from_params(p.get("search"), p.get("category")));

    let search = RwSignal::new(initial_query.search);
    let category = RwSignal::new(initial_query.category);
    let blogs = RwSignal::new(BlogListState::default());
    let user_id = RwSignal::new(None::<String>);

    let initial = Resource::new(query, load_blogs);

    Effect::new(move || {
        session.is_authenticated();
        user_id.set(session.user_id());
    });

    let on_search = {
        let config = config.clone();
        move |_: leptos::ev::MouseEvent| {
            let query = BlogQuery::new(search.get_untracked(), category.get_untracked());
            blogs.update(|s| {
                blog_actions::begin(s);
                s.loading = true;
            });

            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                leptos::task::spawn_local(async move {
                    let outcome = blog_actions::search(&crate::net::http::FetchTransport, &config, &query).await;
                    blogs.update(|s| blog_actions::apply_search(s, outcome));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&config, query);
        }
    };

    let on_save = {
        let config = config.clone();
        Callback::new(move |blog_id: String| {
            let draft = blogs.with_untracked(|s| s.draft.clone().filter(|d| d.blog_id == blog_id));
            let Some(draft) = draft else {
                return;
            };
            blogs.update(blog_actions::begin);

            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                let store = session.store();
                leptos::task::spawn_local(async move {
                    let outcome =
                        blog_actions::save_edit(&crate::net::http::FetchTransport, &config, store.as_ref(), &draft).await;
                    blogs.update(|s| blog_actions::apply_save(s, &blog_id, outcome));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&config, draft);
        })
    };

    let on_delete = Callback::new(move |blog_id: String| {
        blogs.update(blog_actions::begin);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let store = session.store();
            leptos::task::spawn_local(async move {
                let outcome = blog_actions::delete(&crate::net::http::FetchTransport, &config, store.as_ref(), &blog_id).await;
                blogs.update(|s| blog_actions::apply_delete(s, &blog_id, outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, blog_id);
    });

    view! {
        <div class="blog-page">
            <div class="blog-page__filters">
                <input
                    class="blog-page__search"
                    type="text"
                    placeholder="Search blogs..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="blog-page__category"
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="" selected=move || category.with(String::is_empty)>
                        "Select category"
                    </option>
                    {Category::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <option value=c.as_str() selected=move || category.with(|v| c.is_selected(v))>
                                    {c.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button
                    class="blog-page__search-button"
                    on:click=on_search
                    disabled=move || blogs.with(|s| s.loading)
                >
                    "Search"
                </button>
            </div>
            <Show when=move || blogs.with(|s| s.error.is_some())>
                <p class="blog-page__error">{move || blogs.with(|s| s.error.clone())}</p>
            </Show>
            <Suspense fallback=|| view! { <p class="blog-page__loading">"Loading blogs..."</p> }>
                {move || Suspend::new(async move {
                    let state = match initial.await {
                        Ok(page) => page.into_state(),
                        Err(e) => {
                            log::warn!("initial blog load failed: {e}");
                            InitialBlogs { blogs: Vec::new(), error: Some(blog_actions::SEARCH_FAILED.to_owned()) }
                                .into_state()
                        }
                    };
                    blogs.set(state);
                    view! {
                        <div class="blog-page__list">
                            <Show
                                when=move || blogs.with(|s| !s.items.is_empty())
                                fallback=|| view! { <p class="blog-page__empty">"No blogs found."</p> }
                            >
                                <For
                                    each=move || blogs.with(|s| s.items.iter().map(|b| b.id.clone()).collect::<Vec<_>>())
                                    key=|id| id.clone()
                                    children=move |id: String| {
                                        view! {
                                            <BlogCard
                                                id=id
                                                blogs=blogs
                                                user_id=user_id
                                                on_save=on_save
                                                on_delete=on_delete
                                            />
                                        }
                                    }
                                />
                            </Show>
                        </div>
                    }
                })}
            </Suspense>
        </div>
    }
}
