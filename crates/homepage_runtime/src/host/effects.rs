use platform_host::{AudioService, PrefsStore};
use thiserror::Error;

use crate::{
    preferences::{save_preference, PreferenceKey},
    reducer::PlaybackTrigger,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures raised while executing host side effects. None of these reach the user; they are
/// logged for diagnostics only.
pub enum HostEffectError {
    /// The preference store rejected a write.
    #[error("failed to persist `{key}`: {reason}")]
    PersistPreference {
        /// Storage key being written.
        key: &'static str,
        /// Store-reported reason.
        reason: String,
    },
    /// The browser refused to start audio without a user gesture.
    #[error("autoplay blocked: {0}")]
    AutoplayBlocked(String),
    /// Playback failed after an explicit user request.
    #[error("audio playback failed: {0}")]
    Playback(String),
    /// The track could not be paused.
    #[error("audio pause failed: {0}")]
    Pause(String),
    /// The page body class list rejected a theme class change.
    #[error("failed to update body class `{class_name}`: {reason}")]
    BodyClass {
        /// Class being added or removed.
        class_name: &'static str,
        /// DOM-reported reason.
        reason: String,
    },
}

/// Writes one preference flag.
pub async fn persist_preference(
    prefs: &dyn PrefsStore,
    key: PreferenceKey,
    value: bool,
) -> Result<(), HostEffectError> {
    save_preference(prefs, key, value)
        .await
        .map_err(|reason| HostEffectError::PersistPreference {
            key: key.storage_key(),
            reason,
        })
}

/// Starts the background track, classifying a rejection by what requested playback.
pub async fn start_music(
    audio: &dyn AudioService,
    trigger: PlaybackTrigger,
) -> Result<(), HostEffectError> {
    audio.play().await.map_err(|reason| match trigger {
        PlaybackTrigger::Autoplay => HostEffectError::AutoplayBlocked(reason),
        PlaybackTrigger::UserToggle => HostEffectError::Playback(reason),
    })
}

/// Pauses the background track.
pub fn stop_music(audio: &dyn AudioService) -> Result<(), HostEffectError> {
    audio.pause().map_err(HostEffectError::Pause)
}
