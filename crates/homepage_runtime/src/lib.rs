//! Window stacking, dragging, preferences, and guestbook runtime for a single-page homepage.
//!
//! State transitions live in [`reducer`] and stay free of browser APIs. Side effects run through
//! [`host::HomepageHostContext`], and [`components`] renders the Leptos view tree.

pub mod catalog;
pub mod components;
pub mod drag;
mod effect_executor;
pub mod guestbook;
pub mod host;
pub mod model;
pub mod preferences;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;
pub mod z_order;

pub use catalog::{initial_windows, site_config, SiteConfig};
pub use components::HomepageShell;
pub use guestbook::{welcome_message, Guestbook, MessageEntry, MessageKind};
pub use host::{HomepageHostContext, HostEffectError};
pub use model::*;
pub use preferences::{load_preferences, save_preference, PreferenceKey, Preferences};
pub use reducer::{reduce_homepage, HomepageAction, PlaybackTrigger, RuntimeEffect};
pub use runtime_context::{use_homepage_runtime, HomepageProvider, HomepageRuntimeContext};
pub use z_order::{next_z_index, parse_z_index, BASELINE_Z_INDEX};
