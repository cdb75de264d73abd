//! Login page: name + password, then a delayed redirect to the listing.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiConfig;
use crate::state::forms::{FormStatus, LoginForm};
use crate::state::session::SessionContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(|s| s.busy) {
            return;
        }
        status.update(FormStatus::begin);
        let current = form.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            let store = session.store();
            leptos::task::spawn_local(async move {
                let outcome =
                    crate::util::auth::submit_login(&crate::net::http::FetchTransport, &config, store.as_ref(), &current)
                        .await;
                match outcome {
                    Ok(done) => {
                        session.refresh();
                        status.update(|s| s.succeed(done.message));
                        crate::util::auth::navigate_after(done.redirect, navigate);
                    }
                    Err(message) => status.update(|s| s.fail(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, &navigate, session, current);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        name="name"
                        placeholder="Name"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.name = value);
                        }
                    />
                    <input
                        class="auth-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                    <button class="auth-button" type="submit" disabled=move || status.with(|s| s.busy)>
                        "Login"
                    </button>
                </form>
                <StatusLine status=status/>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

/// Success or error line under an auth form.
#[component]
pub(crate) fn StatusLine(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        <Show when=move || status.with(|s| s.message.is_some())>
            <p class="auth-message auth-message--ok">{move || status.with(|s| s.message.clone())}</p>
        </Show>
        <Show when=move || status.with(|s| s.error.is_some())>
            <p class="auth-message auth-message--error">{move || status.with(|s| s.error.clone())}</p>
        </Show>
    }
}
