//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::auth::AuthApi;
use crate::net::client::{ApiClient, GlooClient};
use crate::net::dashboard::DashboardApi;
use crate::net::purchase::PurchaseApi;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, purchase_orders::PurchaseOrdersPage,
};
use crate::state::session::SessionStore;

/// Concrete service types the pages pull from context.
pub type Auth = AuthApi<GlooClient>;
pub type Purchases = PurchaseApi<GlooClient>;
pub type Dashboard = DashboardApi<GlooClient>;

/// Root application component.
///
/// Builds the config and session once, wires the service clients over the
/// shared request helper, provides them all via context, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::restore();
    let api = ApiClient::new(GlooClient, ApiConfig::from_env(), session);
    let auth = AuthApi::new(api.clone());

    provide_context(session);
    provide_context(auth.clone());
    provide_context(PurchaseApi::new(api.clone()));
    provide_context(DashboardApi::new(api));

    // A restored token may be stale: refresh the user once at startup. A
    // 401 clears the session on its own.
    if session.token().is_some() {
        leptos::task::spawn_local(async move {
            let _ = auth.current_user().await;
        });
    }

    view! {
        <Title text="ERP Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("purchase-orders") view=PurchaseOrdersPage/>
            </Routes>
        </Router>
    }
}
