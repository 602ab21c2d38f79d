//! Colored status chip for order tables.

use leptos::prelude::*;

/// Status badge — the modifier class is derived from the label so CSS can
/// color each status without the component knowing the vocabulary.
#[component]
pub fn StatusBadge(label: String) -> impl IntoView {
    let modifier = label.to_lowercase().replace([' ', '_'], "-");
    let class = format!("status-badge status-badge--{modifier}");
    view! { <span class=class>{label}</span> }
}
