//! `<audio>`-element playback adapter.

use platform_host::{AudioFuture, AudioService};

/// DOM id of the page's background-music element.
pub const BACKGROUND_MUSIC_ELEMENT_ID: &str = "backgroundMusic";

#[derive(Debug, Clone, Copy)]
/// Browser audio service that drives an `<audio>` element looked up by id on every call.
pub struct WebAudioService {
    element_id: &'static str,
}

impl Default for WebAudioService {
    fn default() -> Self {
        Self::new(BACKGROUND_MUSIC_ELEMENT_ID)
    }
}

impl WebAudioService {
    /// Creates an adapter for the `<audio>` element with `element_id`.
    pub const fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }

    #[cfg(target_arch = "wasm32")]
    fn element(self) -> Option<web_sys::HtmlAudioElement> {
        use wasm_bindgen::JsCast;

        web_sys::window()?
            .document()?
            .get_element_by_id(self.element_id)?
            .dyn_into::<web_sys::HtmlAudioElement>()
            .ok()
    }
}

impl AudioService for WebAudioService {
    fn play<'a>(&'a self) -> AudioFuture<'a, Result<(), String>> {
        let service = *self;
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let element = service
                    .element()
                    .ok_or_else(|| format!("audio element `{}` not found", service.element_id))?;
                let promise = element
                    .play()
                    .map_err(|err| format!("audio play failed: {err:?}"))?;
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| format!("audio play rejected: {err:?}"))
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = service;
                Ok(())
            }
        })
    }

    fn pause(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let element = self
                .element()
                .ok_or_else(|| format!("audio element `{}` not found", self.element_id))?;
            element
                .pause()
                .map_err(|err| format!("pause() threw {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(())
        }
    }

    fn is_paused(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.element().map(|element| element.paused()).unwrap_or(true)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            true
        }
    }
}
