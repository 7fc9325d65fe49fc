mod web_app;

pub use web_app::{HomepageEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    if platform_host_web::redirect_mobile_visitors() {
        return;
    }
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
