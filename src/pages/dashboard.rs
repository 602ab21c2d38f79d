//! Dashboard page with stats, recent orders, and work orders widgets.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Dashboard;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::components::top_bar::TopBar;
use crate::net::client::ApiError;
use crate::state::session::SessionStore;

/// Dashboard page — three independently loaded widgets. Redirects to
/// `/login` when the session is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let dashboard = expect_context::<Dashboard>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.signal().get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Each widget is its own resource; one failing never blocks the rest.
    let stats = LocalResource::new({
        let dashboard = dashboard.clone();
        move || {
            let dashboard = dashboard.clone();
            async move { dashboard.stats().await }
        }
    });
    let recent = LocalResource::new({
        let dashboard = dashboard.clone();
        move || {
            let dashboard = dashboard.clone();
            async move { dashboard.recent_orders().await }
        }
    });
    let work = LocalResource::new({
        let dashboard = dashboard.clone();
        move || {
            let dashboard = dashboard.clone();
            async move { dashboard.work_orders().await }
        }
    });

    view! {
        <div class="dashboard-page">
            <TopBar/>
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <a href="/purchase-orders" class="btn">"Purchase Orders"</a>
            </header>

            <div class="dashboard-page__stats">
                <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                    {move || {
                        stats.get().map(|result| match result {
                            Ok(s) => view! {
                                <div class="dashboard-page__stat-row">
                                    <StatCard label="Total Orders" value=s.total_orders.to_string()/>
                                    <StatCard label="Pending Orders" value=s.pending_orders.to_string()/>
                                    <StatCard label="Monthly Revenue" value=format!("{:.2}", s.monthly_revenue)/>
                                    <StatCard label="Active Users" value=s.active_users.to_string()/>
                                </div>
                            }
                                .into_any(),
                            Err(e) => widget_error(&e),
                        })
                    }}
                </Suspense>
            </div>

            <section class="dashboard-page__widget">
                <h2>"Recent Orders"</h2>
                <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                    {move || {
                        recent.get().map(|result| match result {
                            Ok(orders) => view! {
                                <table class="dashboard-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Order"</th>
                                            <th>"Supplier"</th>
                                            <th>"Amount"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {orders
                                            .into_iter()
                                            .map(|o| view! {
                                                <tr>
                                                    <td>{o.order_number}</td>
                                                    <td>{o.supplier}</td>
                                                    <td>{format!("{:.2}", o.total_amount)}</td>
                                                    <td><StatusBadge label=o.status/></td>
                                                </tr>
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any(),
                            Err(e) => widget_error(&e),
                        })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__widget">
                <h2>"Work Orders"</h2>
                <Suspense fallback=move || view! { <p>"Loading work orders..."</p> }>
                    {move || {
                        work.get().map(|result| match result {
                            Ok(orders) => view! {
                                <ul class="dashboard-page__work-list">
                                    {orders
                                        .into_iter()
                                        .map(|w| view! {
                                            <li class="dashboard-page__work-item">
                                                <span>{w.title}</span>
                                                <StatusBadge label=w.status/>
                                                <span class="dashboard-page__assignee">
                                                    {w.assignee.unwrap_or_default()}
                                                </span>
                                            </li>
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any(),
                            Err(e) => widget_error(&e),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

fn widget_error(error: &ApiError) -> AnyView {
    view! { <p class="dashboard-page__error">{error.to_string()}</p> }.into_any()
}
