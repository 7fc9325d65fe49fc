//! Shared host-bundle models for browser and headless runtime composition.

use std::rc::Rc;

use crate::{AudioService, MemoryAudioService, MemoryPrefsStore, PrefsStore};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition (`localStorage`, `<audio>` element).
    Browser,
    /// Headless composition with in-memory adapters.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected host service bundle injected into the homepage runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `homepage_runtime`, which keeps the window-management state machine testable without a
/// rendering environment.
#[derive(Clone)]
pub struct HostServices {
    /// Durable preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Background-music playback.
    pub audio: Rc<dyn AudioService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an in-memory bundle over the given adapters.
    pub fn memory(prefs: MemoryPrefsStore, audio: MemoryAudioService) -> Self {
        Self {
            prefs: Rc::new(prefs),
            audio: Rc::new(audio),
            host_strategy: HostStrategy::Memory,
        }
    }
}
