use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, MemoryAudioService, MemoryPrefsStore};

use crate::{WebAudioService, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "memory-host")]
    {
        HostStrategy::Memory
    }

    #[cfg(not(feature = "memory-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Assembles the host bundle for `strategy`.
///
/// `Browser` wires `localStorage` and the page's `<audio>` element; `Memory` wires fresh
/// in-memory adapters that reset with the page.
pub fn host_services_for(strategy: HostStrategy) -> HostServices {
    match strategy {
        HostStrategy::Browser => HostServices {
            prefs: Rc::new(WebPrefsStore),
            audio: Rc::new(WebAudioService::default()),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Memory => {
            HostServices::memory(MemoryPrefsStore::default(), MemoryAudioService::default())
        }
    }
}

/// Assembles the host bundle injected into the homepage runtime for the selected strategy.
pub fn build_host_services() -> HostServices {
    host_services_for(selected_host_strategy())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{AudioService, PrefsStore};

    use super::*;

    #[test]
    fn host_bundle_matches_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(host_strategy_name(), services.host_strategy.as_str());
    }

    #[test]
    fn memory_bundle_round_trips_flags_and_playback() {
        let services = host_services_for(HostStrategy::Memory);
        assert_eq!(services.host_strategy, HostStrategy::Memory);

        block_on(services.prefs.save_pref("nightMode", "true")).expect("save");
        assert_eq!(
            block_on(services.prefs.load_pref("nightMode")).expect("load"),
            Some("true".to_string())
        );

        assert!(services.audio.is_paused());
        block_on(services.audio.play()).expect("play");
        assert!(!services.audio.is_paused());
    }

    #[test]
    fn browser_bundle_reports_paused_off_wasm() {
        let services = host_services_for(HostStrategy::Browser);
        assert_eq!(services.host_strategy, HostStrategy::Browser);
        assert!(services.audio.is_paused());
    }
}
