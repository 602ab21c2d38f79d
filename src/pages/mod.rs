//! Page views. Pages call the service clients from context and render the
//! results; they hold no business logic of their own.

pub mod dashboard;
pub mod login;
pub mod purchase_orders;
