// src/audio.rs

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("audio playback is not available on this build")]
    Unavailable,
    #[error("audio asset `{0}` not found")]
    Missing(String),
}

/// A loaded clip. Unloading is idempotent.
pub trait Playback {
    fn asset(&self) -> &str;
    fn play(&mut self) -> Result<(), AudioError>;
    fn unload(&mut self);
}

pub trait AudioBackend {
    fn load(&self, asset: &str) -> Result<Box<dyn Playback>, AudioError>;
}

/// No clips are bundled, every load fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn load(&self, _asset: &str) -> Result<Box<dyn Playback>, AudioError> {
        Err(AudioError::Unavailable)
    }
}

/// Holds at most one playback. A new request or a drop releases the old one.
#[derive(Default)]
pub struct PlaybackSlot {
    current: Option<Box<dyn Playback>>,
}

impl std::fmt::Debug for PlaybackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSlot")
            .field("current", &self.current.as_ref().map(|p| p.asset().to_owned()))
            .finish()
    }
}

impl PlaybackSlot {
    /// Failures are logged, never surfaced to the UI.
    pub fn play(&mut self, backend: &dyn AudioBackend, asset: &str) {
        self.stop();
        match backend.load(asset) {
            Ok(mut playback) => {
                if let Err(err) = playback.play() {
                    log::warn!("could not play {asset}: {err}");
                }
                self.current = Some(playback);
            }
            Err(err) => log::warn!("could not load {asset}: {err}"),
        }
    }

    pub fn stop(&mut self) {
        if let Some(mut old) = self.current.take() {
            old.unload();
        }
    }

    pub fn current_asset(&self) -> Option<&str> {
        self.current.as_ref().map(|p| p.asset())
    }
}

impl Drop for PlaybackSlot {
    fn drop(&mut self) {
        self.stop();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingAudio;
    use super::*;

    #[test]
    fn new_play_unloads_previous() {
        let audio = RecordingAudio::default();
        let mut slot = PlaybackSlot::default();
        slot.play(&audio, "q1.mp3");
        slot.play(&audio, "q2.mp3");
        assert_eq!(
            audio.log(),
            ["load q1.mp3", "play q1.mp3", "unload q1.mp3", "load q2.mp3", "play q2.mp3"]
        );
        assert_eq!(slot.current_asset(), Some("q2.mp3"));
    }

    #[test]
    fn drop_releases_playback() {
        let audio = RecordingAudio::default();
        {
            let mut slot = PlaybackSlot::default();
            slot.play(&audio, "q3.mp3");
        }
        assert_eq!(audio.log().last().map(String::as_str), Some("unload q3.mp3"));
    }

    #[test]
    fn null_backend_failure_leaves_slot_empty() {
        let mut slot = PlaybackSlot::default();
        slot.play(&NullAudio, "q1.mp3");
        assert_eq!(slot.current_asset(), None);
        assert_eq!(
            NullAudio.load("x").err(),
            Some(AudioError::Unavailable)
        );
    }
}
