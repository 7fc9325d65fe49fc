//! Reducer actions, side-effect intents, and transition logic for the homepage runtime.

use crate::{
    drag::{begin_drag, end_drag, update_drag},
    model::{HomepageState, InteractionState, PointerPosition, WindowId},
    preferences::{PreferenceKey, Preferences},
    window_manager::{
        close_window, maximize_window, minimize_window, notify_window_interaction, open_window,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_homepage`] to mutate [`HomepageState`].
pub enum HomepageAction {
    /// Show a window in normal state on top of the stack.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Hide a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Hide a window (same transition as close).
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle a window between maximized and normal.
    MaximizeWindow {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Pointer went down somewhere on a window.
    WindowInteraction {
        /// Window that was touched.
        window_id: WindowId,
    },
    /// Pointer went down on a window's drag handle.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer moved anywhere in the document.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released anywhere in the document.
    EndDrag,
    /// Apply preferences read from durable storage at startup.
    HydratePreferences {
        /// Stored preferences.
        preferences: Preferences,
    },
    /// Flip night mode.
    ToggleTheme,
    /// Flip background music based on the audio element's current state.
    ToggleMusic {
        /// Whether the audio element is paused right now.
        audio_paused: bool,
    },
    /// Replace the guestbook with the welcome entry.
    ResetGuestbook,
    /// Submit guestbook input.
    SendGuestbookMessage {
        /// Raw input text.
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why playback was requested; decides how a rejection is reported.
pub enum PlaybackTrigger {
    /// Restoring a stored "playing" preference at startup.
    Autoplay,
    /// The user clicked the music toggle.
    UserToggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_homepage`] for the host to execute.
pub enum RuntimeEffect {
    /// Write one preference flag to durable storage.
    PersistPreference {
        /// Flag to write.
        key: PreferenceKey,
        /// New value.
        value: bool,
    },
    /// Start background music.
    PlayMusic(PlaybackTrigger),
    /// Pause background music.
    PauseMusic,
    /// Empty the guestbook input field.
    ClearMessageInput,
    /// Scroll the guestbook so the newest entry is visible.
    ScrollGuestbookToEnd,
}

/// Applies a [`HomepageAction`] and collects the resulting side effects.
///
/// Actions that reference unknown windows, or that have nothing to act on, leave the state
/// untouched and return no effects.
pub fn reduce_homepage(
    state: &mut HomepageState,
    interaction: &mut InteractionState,
    action: HomepageAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        HomepageAction::OpenWindow { window_id } => {
            open_window(state, &window_id);
        }
        HomepageAction::CloseWindow { window_id } => {
            close_window(state, &window_id);
        }
        HomepageAction::MinimizeWindow { window_id } => {
            minimize_window(state, &window_id);
        }
        HomepageAction::MaximizeWindow { window_id } => {
            maximize_window(state, &window_id);
        }
        HomepageAction::WindowInteraction { window_id } => {
            notify_window_interaction(state, &window_id);
        }
        HomepageAction::BeginDrag { window_id, pointer } => {
            // The handle sits inside the window, so pressing it also counts as touching it.
            notify_window_interaction(state, &window_id);
            begin_drag(state, interaction, &window_id, pointer);
        }
        HomepageAction::UpdateDrag { pointer } => {
            update_drag(state, interaction, pointer);
        }
        HomepageAction::EndDrag => {
            end_drag(interaction);
        }
        HomepageAction::HydratePreferences { preferences } => {
            state.preferences = preferences;
            if preferences.music_playing {
                effects.push(RuntimeEffect::PlayMusic(PlaybackTrigger::Autoplay));
            }
        }
        HomepageAction::ToggleTheme => {
            state.preferences.night_mode = !state.preferences.night_mode;
            effects.push(RuntimeEffect::PersistPreference {
                key: PreferenceKey::NightMode,
                value: state.preferences.night_mode,
            });
        }
        HomepageAction::ToggleMusic { audio_paused } => {
            state.preferences.music_playing = audio_paused;
            effects.push(if audio_paused {
                RuntimeEffect::PlayMusic(PlaybackTrigger::UserToggle)
            } else {
                RuntimeEffect::PauseMusic
            });
            effects.push(RuntimeEffect::PersistPreference {
                key: PreferenceKey::MusicPlaying,
                value: audio_paused,
            });
        }
        HomepageAction::ResetGuestbook => {
            state.guestbook.reset();
        }
        HomepageAction::SendGuestbookMessage { text } => {
            if state.guestbook.send(&text) {
                effects.push(RuntimeEffect::ClearMessageInput);
                effects.push(RuntimeEffect::ScrollGuestbookToEnd);
            }
        }
    }

    effects
}
