//! Homepage UI composition: window layer, page-level toggles, and document pointer tracking.

mod guestbook;
mod toggles;
mod window;

use leptos::*;

use self::{
    toggles::{MusicToggle, ThemeToggle},
    window::HomepageWindow,
};
use crate::{
    catalog::site_config,
    host::BACKGROUND_MUSIC_ID,
    model::{PointerPosition, WindowId},
    reducer::HomepageAction,
    runtime_context::use_homepage_runtime,
};

#[component]
/// Renders every catalog window plus the theme and music controls.
///
/// Must be mounted inside [`crate::HomepageProvider`].
pub fn HomepageShell() -> impl IntoView {
    let runtime = use_homepage_runtime();
    let state = runtime.state;

    create_effect(move |_| {
        let night_mode = state.with(|s| s.preferences.night_mode);
        runtime
            .host
            .with_value(|host| host.apply_theme_class(night_mode));
    });

    // Drags keep tracking after the pointer leaves the window, so listen on the document.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_none()) {
            return;
        }
        runtime.dispatch_action(HomepageAction::UpdateDrag {
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    on_cleanup(move || move_listener.remove());

    let release_listener = window_event_listener(ev::pointerup, move |_| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(HomepageAction::EndDrag);
        }
    });
    on_cleanup(move || release_listener.remove());

    let window_ids = move || {
        state.with(|s| {
            s.windows
                .iter()
                .map(|w| w.id.clone())
                .collect::<Vec<WindowId>>()
        })
    };

    view! {
        <main class="homepage">
            <div class="page-controls">
                <ThemeToggle />
                <MusicToggle />
            </div>
            <audio id=BACKGROUND_MUSIC_ID src=site_config().music_src.clone() loop=true></audio>
            <For each=window_ids key=|id| id.clone() let:window_id>
                <HomepageWindow window_id=window_id />
            </For>
        </main>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.stop_propagation();
}
