//! Host-side runtime helpers for executing reducer effects against the page environment.
//!
//! Reducer semantics stay pure; storage, audio, and DOM side effects run here behind the
//! injected [`HostServices`] bundle so they can be swapped for in-memory adapters in tests.

mod boot;
mod dom;
mod effects;

use std::rc::Rc;

use leptos::{logging, request_animation_frame, spawn_local, Callback};
use platform_host::{AudioService, HostServices, PrefsStore};

pub use effects::{persist_preference, start_music, stop_music, HostEffectError};

use crate::{
    preferences::NIGHT_MODE_CLASS,
    reducer::{HomepageAction, RuntimeEffect},
};

/// DOM id of the guestbook text input.
pub const MESSAGE_INPUT_ID: &str = "messageInput";
/// DOM id of the guestbook message list.
pub const CHAT_MESSAGES_ID: &str = "chatMessages";
/// DOM id of the looping background-music `<audio>` element.
pub const BACKGROUND_MUSIC_ID: &str = "backgroundMusic";

#[derive(Clone)]
/// Host service bundle for homepage runtime side effects.
pub struct HomepageHostContext {
    prefs: Rc<dyn PrefsStore>,
    audio: Rc<dyn AudioService>,
    host_strategy_name: &'static str,
}

impl HomepageHostContext {
    /// Wraps an injected host bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            audio: services.audio,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Whether the background track is paused right now.
    pub fn music_paused(&self) -> bool {
        self.audio.is_paused()
    }

    /// Installs startup work: the guestbook welcome entry and stored preference hydration.
    pub fn install_boot_hydration(&self, dispatch: Callback<HomepageAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Adds or removes the night-mode class on the page body.
    pub fn apply_theme_class(&self, night_mode: bool) {
        if let Err(err) = dom::set_body_class(NIGHT_MODE_CLASS, night_mode) {
            logging::warn!("{err}");
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistPreference { key, value } => {
                let prefs = self.prefs.clone();
                spawn_local(async move {
                    if let Err(err) = persist_preference(prefs.as_ref(), key, value).await {
                        logging::warn!("{err}");
                    }
                });
            }
            RuntimeEffect::PlayMusic(trigger) => {
                let audio = self.audio.clone();
                spawn_local(async move {
                    match start_music(audio.as_ref(), trigger).await {
                        Ok(()) => {}
                        Err(err @ HostEffectError::AutoplayBlocked(_)) => {
                            logging::log!("{err}; user needs to interact with the page");
                        }
                        Err(err) => logging::warn!("{err}"),
                    }
                });
            }
            RuntimeEffect::PauseMusic => {
                if let Err(err) = stop_music(self.audio.as_ref()) {
                    logging::warn!("{err}");
                }
            }
            RuntimeEffect::ClearMessageInput => dom::clear_input_value(MESSAGE_INPUT_ID),
            RuntimeEffect::ScrollGuestbookToEnd => {
                request_animation_frame(|| dom::scroll_to_bottom(CHAT_MESSAGES_ID));
            }
        }
    }
}

impl std::fmt::Debug for HomepageHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomepageHostContext")
            .field("host_strategy_name", &self.host_strategy_name)
            .finish_non_exhaustive()
    }
}

