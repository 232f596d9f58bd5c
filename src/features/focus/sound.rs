//! Audio cues.
//!
//! The engine asks for a [`Sound`] at start, stop, and time-up. Players are
//! fire-and-forget: a failure is returned to the engine, which logs it and
//! carries on.

use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cue the engine can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sound {
    /// Countdown started.
    Start,
    /// Countdown paused, reset, or switched.
    Stop,
    /// A phase ran out.
    TimeUp,
}

impl Sound {
    /// Stable identifier used in config keys and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::TimeUp => "time_up",
        }
    }
}

/// Why a cue could not be played.
#[derive(Debug, Error)]
pub enum SoundError {
    /// The sound file or output device could not be opened.
    #[error("sound output failed: {0}")]
    Io(#[from] std::io::Error),

    /// No file is configured for this cue.
    #[error("no sound file configured for '{}'", .0.as_str())]
    MissingFile(Sound),
}

/// Something that can play cues.
#[cfg_attr(test, mockall::automock)]
pub trait SoundPlayer {
    /// Play a cue without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the cue could not be handed to the output.
    fn play(&self, sound: Sound) -> Result<(), SoundError>;
}

/// Loudest volume, in percent.
pub const MAX_VOLUME: u8 = 100;

/// Which player to build from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundBackend {
    /// Terminal bell.
    #[default]
    Bell,
    /// Configured sound files, decoded in-process. Needs the `audio` feature.
    File,
    /// No audio at all.
    None,
}

/// Per-cue sound files for the `file` backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundFiles {
    /// File played on start.
    pub start: Option<PathBuf>,
    /// File played on stop.
    pub stop: Option<PathBuf>,
    /// File played when a phase runs out.
    pub time_up: Option<PathBuf>,
}

impl SoundFiles {
    /// File configured for a cue.
    #[must_use]
    pub const fn get(&self, sound: Sound) -> Option<&PathBuf> {
        match sound {
            Sound::Start => self.start.as_ref(),
            Sound::Stop => self.stop.as_ref(),
            Sound::TimeUp => self.time_up.as_ref(),
        }
    }
}

/// Rings the terminal bell; time-up rings three times.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellPlayer;

impl SoundPlayer for BellPlayer {
    fn play(&self, sound: Sound) -> Result<(), SoundError> {
        let bell: &[u8] = match sound {
            Sound::Start | Sound::Stop => b"\x07",
            Sound::TimeUp => b"\x07\x07\x07",
        };
        let mut stdout = std::io::stdout();
        stdout.write_all(bell)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Decodes and plays per-cue sound files on the default output device.
///
/// Each cue plays on its own thread so the event loop never waits for the
/// device.
#[cfg(feature = "audio")]
#[derive(Debug, Clone)]
pub struct FilePlayer {
    files: SoundFiles,
    volume: u8,
}

#[cfg(feature = "audio")]
impl FilePlayer {
    /// Create a player for the given files at `volume` percent.
    #[must_use]
    pub fn new(files: SoundFiles, volume: u8) -> Self {
        Self {
            files,
            volume: volume.min(MAX_VOLUME),
        }
    }
}

#[cfg(feature = "audio")]
impl SoundPlayer for FilePlayer {
    fn play(&self, sound: Sound) -> Result<(), SoundError> {
        use std::io::BufReader;

        use rodio::{Decoder, OutputStream, Sink};

        let path = self.files.get(sound).ok_or(SoundError::MissingFile(sound))?;
        let file = std::fs::File::open(path)?;
        let volume = f32::from(self.volume) / 100.0;

        std::thread::spawn(move || {
            let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
                tracing::warn!(sound = sound.as_str(), "no audio output device");
                return;
            };
            let source = match Decoder::new(BufReader::new(file)) {
                Ok(source) => source,
                Err(e) => {
                    tracing::warn!(sound = sound.as_str(), error = %e, "could not decode sound file");
                    return;
                }
            };
            let Ok(sink) = Sink::try_new(&stream_handle) else {
                return;
            };

            sink.set_volume(volume);
            sink.append(source);
            sink.sleep_until_end();
        });
        Ok(())
    }
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _sound: Sound) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Remembers every cue it was asked to play.
///
/// Clones share one log.
#[derive(Debug, Default, Clone)]
pub struct RecordingPlayer {
    played: Rc<RefCell<Vec<Sound>>>,
}

impl RecordingPlayer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues requested so far, oldest first.
    #[must_use]
    pub fn played(&self) -> Vec<Sound> {
        self.played.borrow().clone()
    }

    /// Forget everything recorded.
    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&self, sound: Sound) -> Result<(), SoundError> {
        self.played.borrow_mut().push(sound);
        Ok(())
    }
}

/// Build the player selected in configuration.
///
/// Without the `audio` feature the `file` backend falls back to the bell.
#[must_use]
#[cfg_attr(not(feature = "audio"), allow(unused_variables))]
pub fn player_for(backend: SoundBackend, files: &SoundFiles, volume: u8) -> Box<dyn SoundPlayer> {
    match backend {
        SoundBackend::Bell => Box::new(BellPlayer),
        #[cfg(feature = "audio")]
        SoundBackend::File => Box::new(FilePlayer::new(files.clone(), volume)),
        #[cfg(not(feature = "audio"))]
        SoundBackend::File => {
            tracing::warn!("sound backend 'file' needs the 'audio' feature, using the bell");
            Box::new(BellPlayer)
        }
        SoundBackend::None => Box::new(SilentPlayer),
    }
}
