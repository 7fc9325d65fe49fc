//! Lightweight preference storage contracts and adapters.
//!
//! Values are stored as raw text per key. Boolean flags use the literal strings `"true"` and
//! `"false"`.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for durable key/value preference text.
pub trait PrefsStore {
    /// Loads the raw stored text for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves raw text for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, which lets tests simulate a page reload by building a
/// fresh runtime over a clone of the store.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw stored text for `key` without going through the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_value.to_string());
            Ok(())
        })
    }
}

/// Interprets stored flag text. Only the exact string `"true"` is truthy.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Loads a boolean flag; absent, unreadable, or non-`"true"` values resolve to `false`.
pub async fn load_flag_with<S: PrefsStore + ?Sized>(store: &S, key: &str) -> bool {
    match store.load_pref(key).await {
        Ok(raw) => parse_flag(raw.as_deref()),
        Err(_) => false,
    }
}

/// Saves a boolean flag as `"true"` or `"false"`.
///
/// # Errors
///
/// Returns an error when the store save fails.
pub async fn save_flag_with<S: PrefsStore + ?Sized>(
    store: &S,
    key: &str,
    value: bool,
) -> Result<(), String> {
    store.save_pref(key, if value { "true" } else { "false" }).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingPrefsStore;

    impl PrefsStore for FailingPrefsStore {
        fn load_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            Box::pin(async { Err("storage unavailable".to_string()) })
        }

        fn save_pref<'a>(
            &'a self,
            _key: &'a str,
            _raw_value: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("storage unavailable".to_string()) })
        }
    }

    #[test]
    fn memory_store_clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let reloaded = store.clone();

        block_on(store.save_pref("nightMode", "true")).expect("save");
        assert_eq!(reloaded.raw("nightMode"), Some("true".to_string()));

        block_on(reloaded.save_pref("nightMode", "false")).expect("save");
        assert_eq!(
            block_on(store.load_pref("nightMode")).expect("load"),
            Some("false".to_string())
        );
    }

    #[test]
    fn flags_only_accept_the_exact_true_string() {
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("TRUE")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn flag_helpers_write_literal_strings() {
        let store = MemoryPrefsStore::default();
        block_on(save_flag_with(&store, "musicPlaying", true)).expect("save true");
        assert_eq!(store.raw("musicPlaying"), Some("true".to_string()));
        assert!(block_on(load_flag_with(&store, "musicPlaying")));

        block_on(save_flag_with(&store, "musicPlaying", false)).expect("save false");
        assert_eq!(store.raw("musicPlaying"), Some("false".to_string()));
        assert!(!block_on(load_flag_with(&store, "musicPlaying")));
    }

    #[test]
    fn unreadable_store_resolves_flags_to_false() {
        assert!(!block_on(load_flag_with(&FailingPrefsStore, "nightMode")));
        assert!(block_on(save_flag_with(&FailingPrefsStore, "nightMode", true)).is_err());
    }
}
