//! Typed host-domain contracts shared by the homepage runtime and its browser adapters.
//!
//! This crate is the API-first boundary for platform services: durable preference storage,
//! background-audio playback, and user-agent classification. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod host;
pub mod storage;
pub mod user_agent;

pub use audio::{AudioFuture, AudioService, MemoryAudioService};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_flag_with, parse_flag, save_flag_with, MemoryPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use user_agent::{is_mobile_user_agent, MOBILE_PAGE_PATH};
