//! Top navigation bar reflecting the stored session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored session can change on any page (login writes it, logout clears
//! it), so the bar re-reads it on mount and after every completed route
//! change. The location effect is owned by this component and is disposed
//! with it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionContext;
use crate::util::auth::LOGOUT_ROUTE;

/// Brand button, Signup / Blog links, and Login or Logout.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        location.pathname.track();
        session.refresh();
    });

    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| navigate(path, NavigateOptions::default())
    };

    let on_logout = {
        let navigate = go(LOGOUT_ROUTE);
        move |ev: leptos::ev::MouseEvent| {
            log::info!("signing out");
            session.sign_out();
            navigate(ev);
        }
    };
    let on_login = go("/login");

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <button class="navbar__brand" on:click=go("/blog")>
                    "Blog App"
                </button>
                <div class="navbar__links">
                    <button class="navbar__link" on:click=go("/signup")>
                        "SignUp"
                    </button>
                    <button class="navbar__link" on:click=go("/blog")>
                        "Blog"
                    </button>
                    {move || {
                        if session.is_authenticated() {
                            let on_logout = on_logout.clone();
                            view! {
                                <button class="navbar__link" on:click=on_logout>
                                    "Logout"
                                </button>
                            }
                                .into_any()
                        } else {
                            let on_login = on_login.clone();
                            view! {
                                <button class="navbar__link" on:click=on_login>
                                    "Login"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
