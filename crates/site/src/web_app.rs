use homepage_runtime::{site_config, HomepageProvider, HomepageShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::{build_host_services, host_strategy_name};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let site = site_config();

    view! {
        <Title text=site.title.clone() />
        <Meta name="description" content=site.description.clone() />
        <HomepageEntry />
    }
}

#[component]
pub fn HomepageEntry() -> impl IntoView {
    logging::log!("mounting homepage with {} host", host_strategy_name());

    view! {
        <HomepageProvider host_services=build_host_services()>
            <HomepageShell />
        </HomepageProvider>
    }
}
