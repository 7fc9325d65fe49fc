//! Background-audio playback contracts and in-memory adapters.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`AudioService`].
pub type AudioFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service controlling a single background-music track.
pub trait AudioService {
    /// Requests playback.
    ///
    /// Resolves to an error when the host refuses playback, for example when a browser blocks
    /// audio that was not started by a user gesture.
    fn play<'a>(&'a self) -> AudioFuture<'a, Result<(), String>>;

    /// Pauses playback. Pausing an already paused track succeeds without effect.
    ///
    /// Resolves to an error when the host cannot reach or pause the track.
    fn pause(&self) -> Result<(), String>;

    /// Returns whether the track is currently paused.
    fn is_paused(&self) -> bool;
}

#[derive(Debug, Clone)]
/// In-memory audio track used by tests and headless builds.
pub struct MemoryAudioService {
    paused: Rc<Cell<bool>>,
    play_calls: Rc<Cell<u32>>,
    block_playback: bool,
}

impl Default for MemoryAudioService {
    fn default() -> Self {
        Self {
            paused: Rc::new(Cell::new(true)),
            play_calls: Rc::new(Cell::new(0)),
            block_playback: false,
        }
    }
}

impl MemoryAudioService {
    /// Builds a track whose `play` requests are always rejected, like a blocked autoplay.
    pub fn blocking_playback() -> Self {
        Self {
            block_playback: true,
            ..Self::default()
        }
    }

    /// Number of `play` requests received so far.
    pub fn play_calls(&self) -> u32 {
        self.play_calls.get()
    }
}

impl AudioService for MemoryAudioService {
    fn play<'a>(&'a self) -> AudioFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.play_calls.set(self.play_calls.get() + 1);
            if self.block_playback {
                return Err("NotAllowedError: play() requires a user gesture".to_string());
            }
            self.paused.set(false);
            Ok(())
        })
    }

    fn pause(&self) -> Result<(), String> {
        self.paused.set(true);
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_track_starts_paused_and_plays_on_request() {
        let track = MemoryAudioService::default();
        assert!(track.is_paused());

        block_on(track.play()).expect("play");
        assert!(!track.is_paused());
        assert_eq!(track.play_calls(), 1);

        track.pause().expect("pause");
        assert!(track.is_paused());
    }

    #[test]
    fn blocked_track_rejects_and_stays_paused() {
        let track = MemoryAudioService::blocking_playback();
        let result = block_on(track.play());
        assert!(result.is_err());
        assert!(track.is_paused());
        assert_eq!(track.play_calls(), 1);
    }
}
