//! Sign-in page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Auth;
use crate::state::session::SessionStore;

/// Login page — submits credentials and surfaces the typed error message
/// on rejection. Navigation happens reactively once the session becomes
/// authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<Auth>();
    let navigate = use_navigate();

    // Already signed in (or just signed in): go to the dashboard.
    Effect::new(move || {
        if session.signal().get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = move || session.signal().get().loading;

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            let outcome = auth
                .login(email.get_untracked().trim(), &password.get_untracked())
                .await;
            if let Err(e) = outcome {
                error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"ERP Console"</h1>
            <p class="login-page__subtitle">"Sign in to continue"</p>
            <form class="login-page__form" on:submit=submit>
                <input
                    class="login-page__input"
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-page__input"
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
