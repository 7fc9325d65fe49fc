//! Runtime provider and context wiring for the homepage shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host boot
//! wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::HostServices;

use crate::{
    catalog, effect_executor,
    host::HomepageHostContext,
    model::{HomepageState, InteractionState},
    reducer::{reduce_homepage, HomepageAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading homepage state and dispatching [`HomepageAction`] values.
pub struct HomepageRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<HomepageHostContext>,
    /// Reactive window/preference/guestbook state.
    pub state: RwSignal<HomepageState>,
    /// Reactive pointer-drag state.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<HomepageAction>,
}

impl HomepageRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: HomepageAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: HomepageRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`HomepageRuntimeContext`] to descendant components and restores stored preferences.
pub fn HomepageProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(HomepageHostContext::new(host_services));
    let state = create_rw_signal(HomepageState::new(catalog::initial_windows()));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: HomepageAction| {
        let mut homepage = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_homepage = homepage.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_homepage(&mut homepage, &mut ui, action);
        if homepage != previous_homepage {
            state.set(homepage);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = HomepageRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`HomepageRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`HomepageProvider`].
pub fn use_homepage_runtime() -> HomepageRuntimeContext {
    use_context::<HomepageRuntimeContext>().expect("HomepageRuntimeContext not provided")
}
