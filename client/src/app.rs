//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::api::ApiConfig;
use crate::pages::{blog::BlogPage, login::LoginPage, signup::SignupPage};
use crate::state::session::{SessionContext, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API location and the session handle, then sets up routing.
/// The server may provide its own [`ApiConfig`] before rendering; otherwise
/// the build's default is used.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<ApiConfig>().is_none() {
        provide_context(ApiConfig::from_env());
    }
    provide_context(SessionContext::new(session_store()));

    view! {
        <Stylesheet id="leptos" href="/pkg/blog-ui.css"/>
        <Title text="Blog App"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/blog"/> }/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// `localStorage` in the browser; an empty in-memory store while rendering
/// on the server, where no session is visible.
fn session_store() -> Arc<dyn SessionStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::state::session::LocalStorageStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(crate::state::session::MemorySessionStore::default())
    }
}
