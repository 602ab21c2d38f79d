//! Top navigation bar with the signed-in user and logout action.

use leptos::prelude::*;

use crate::app::Auth;
use crate::state::session::SessionStore;

/// Top bar — brand, current user name, and a sign-out button. The sign-out
/// always lands on the login page, server reachable or not.
#[component]
pub fn TopBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<Auth>();

    let user_name = move || {
        session
            .signal()
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.logout().await;
        });
    };

    view! {
        <nav class="top-bar">
            <a href="/" class="top-bar__brand">"ERP Console"</a>
            <span class="top-bar__spacer"></span>
            <span class="top-bar__user">{user_name}</span>
            <button class="btn btn--ghost" on:click=on_logout>"Sign out"</button>
        </nav>
    }
}
