//! Single headline-number card for the dashboard stats row.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
