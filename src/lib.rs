//! # erp-console
//!
//! Leptos + WASM front-end for the ERP administration API: authentication
//! and session handling, purchase-order management, and dashboard widgets.
//!
//! This crate contains pages, components, the session store, and the
//! authenticated HTTP client layer. The remote REST API is an external
//! collaborator; everything here is a thin, typed client over it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
