//! Network layer: wire types, the authenticated request helper, and the
//! domain service clients built on top of it.
//!
//! DESIGN
//! ======
//! Every client is generic over the [`client::HttpClient`] transport so
//! unit tests swap in a scripted fake; the browser build plugs in
//! [`client::GlooClient`].

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod purchase;
pub mod types;

#[cfg(test)]
pub mod fake;
