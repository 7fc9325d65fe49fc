//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Native (non-wasm) builds compile the same adapters with inert fallbacks so the runtime crate
//! can be unit-tested on the host toolchain.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod audio;
pub mod navigation;
pub mod storage;

pub use adapters::{
    build_host_services, host_services_for, host_strategy_name, selected_host_strategy,
};
pub use audio::{WebAudioService, BACKGROUND_MUSIC_ELEMENT_ID};
pub use navigation::redirect_mobile_visitors;
pub use storage::local_prefs::WebPrefsStore;
