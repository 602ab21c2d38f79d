//! Reusable view components.

pub mod stat_card;
pub mod status_badge;
pub mod top_bar;
