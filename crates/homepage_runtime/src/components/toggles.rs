use super::*;

#[component]
pub(super) fn ThemeToggle() -> impl IntoView {
    let runtime = use_homepage_runtime();
    let glyph = move || {
        runtime
            .state
            .with(|s| s.preferences.theme_toggle_glyph())
    };

    view! {
        <button
            id="themeToggle"
            class="toggle-button"
            aria-label="Toggle night mode"
            on:click=move |_| runtime.dispatch_action(HomepageAction::ToggleTheme)
        >
            {glyph}
        </button>
    }
}

#[component]
pub(super) fn MusicToggle() -> impl IntoView {
    let runtime = use_homepage_runtime();
    let icon_src = move || runtime.state.with(|s| s.preferences.music_icon_src());

    let toggle = move |_| {
        let audio_paused = runtime.host.with_value(|host| host.music_paused());
        runtime.dispatch_action(HomepageAction::ToggleMusic { audio_paused });
    };

    view! {
        <button
            id="musicToggle"
            class="toggle-button"
            aria-label="Toggle background music"
            on:click=toggle
        >
            <img id="musicToggleIcon" src=icon_src alt="" />
        </button>
    }
}
