//! Page-level navigation helpers.

/// Sends phone browsers to the mobile page.
///
/// Returns `true` when a redirect was issued. Must run before the homepage shell mounts.
pub fn redirect_mobile_visitors() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use platform_host::{is_mobile_user_agent, MOBILE_PAGE_PATH};

        let Some(window) = web_sys::window() else {
            return false;
        };
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        if !is_mobile_user_agent(&user_agent) {
            return false;
        }
        window.location().set_href(MOBILE_PAGE_PATH).is_ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
