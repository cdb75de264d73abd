//! Signup page: name, password and role, then a delayed redirect to login.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiConfig;
use crate::net::types::Role;
use crate::pages::login::StatusLine;
use crate::state::forms::{FormStatus, SignupForm};

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
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
            leptos::task::spawn_local(async move {
                match crate::util::auth::submit_signup(&crate::net::http::FetchTransport, &config, &current).await {
                    Ok(done) => {
                        status.update(|s| s.succeed(done.message));
                        crate::util::auth::navigate_after(done.redirect, navigate);
                    }
                    Err(message) => status.update(|s| s.fail(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, &navigate, current);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
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
                    <select
                        class="auth-input"
                        name="role"
                        required
                        on:change=move |ev| {
                            let role = Role::parse(&event_target_value(&ev));
                            form.update(|f| f.role = role);
                        }
                    >
                        <option value="" selected=move || form.with(|f| f.role.is_none())>
                            "Select role"
                        </option>
                        {Role::ALL
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <option value=r.as_str() selected=move || form.with(|f| f.role == Some(r))>
                                        {r.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button class="auth-button" type="submit" disabled=move || status.with(|s| s.busy)>
                        "Sign Up"
                    </button>
                </form>
                <StatusLine status=status/>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
