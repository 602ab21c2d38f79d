//! Hard browser navigation, for flows that must leave the SPA router.

/// Navigate to the sign-in page with a full page load, dropping any
/// in-memory view state. No-op outside a browser.
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
