//! Theme and background-music preferences and their durable storage keys.

use platform_host::{load_flag_with, save_flag_with, PrefsStore};
use serde::{Deserialize, Serialize};

/// Storage key for the night-mode flag.
pub const NIGHT_MODE_KEY: &str = "nightMode";
/// Storage key for the music-playing flag.
pub const MUSIC_PLAYING_KEY: &str = "musicPlaying";

/// Class applied to the page body while night mode is on.
pub const NIGHT_MODE_CLASS: &str = "night-mode";

const NIGHT_MODE_GLYPH: &str = "\u{2600}\u{fe0f}";
const DAY_MODE_GLYPH: &str = "\u{1f319}";

/// Music toggle icon while playing.
pub const MUSIC_PLAYING_ICON_SRC: &str =
    "https://media1.tenor.com/m/tB9MDMlIh_oAAAAC/squirtle-shame.gif";
/// Music toggle icon while paused.
pub const MUSIC_PAUSED_ICON_SRC: &str =
    "https://nursang.carrd.co/assets/images/image05.png?v=90346968";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferenceKey {
    NightMode,
    MusicPlaying,
}

impl PreferenceKey {
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::NightMode => NIGHT_MODE_KEY,
            Self::MusicPlaying => MUSIC_PLAYING_KEY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub night_mode: bool,
    pub music_playing: bool,
}

impl Preferences {
    /// Glyph on the theme toggle: a sun offers day mode while night mode is on.
    pub fn theme_toggle_glyph(&self) -> &'static str {
        if self.night_mode {
            NIGHT_MODE_GLYPH
        } else {
            DAY_MODE_GLYPH
        }
    }

    pub fn music_icon_src(&self) -> &'static str {
        if self.music_playing {
            MUSIC_PLAYING_ICON_SRC
        } else {
            MUSIC_PAUSED_ICON_SRC
        }
    }
}

/// Reads both flags; absent or non-`"true"` values are `false`.
pub async fn load_preferences(store: &dyn PrefsStore) -> Preferences {
    Preferences {
        night_mode: load_flag_with(store, NIGHT_MODE_KEY).await,
        music_playing: load_flag_with(store, MUSIC_PLAYING_KEY).await,
    }
}

/// Writes one flag as `"true"`/`"false"`.
pub async fn save_preference(
    store: &dyn PrefsStore,
    key: PreferenceKey,
    value: bool,
) -> Result<(), String> {
    save_flag_with(store, key.storage_key(), value).await
}
