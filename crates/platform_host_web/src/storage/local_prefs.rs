//! `localStorage`-backed preference store implementation.
//!
//! The browser API is synchronous; the [`platform_host::PrefsStore`] futures resolve
//! immediately. Values are written verbatim, so flags land as the strings `"true"`/`"false"`.

use platform_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Loads the raw stored text for a key.
    pub fn load_raw(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Saves raw text for a key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails (quota, private mode).
    pub fn save_raw(self, key: &str, raw_value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(key, raw_value)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_value);
            Ok(())
        }
    }

}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.load_raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_raw(key, raw_value) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_fallback_reads_nothing_and_accepts_writes() {
        let store = WebPrefsStore;
        block_on(store.save_pref("nightMode", "true")).expect("save");
        assert_eq!(block_on(store.load_pref("nightMode")).expect("load"), None);
    }
}
