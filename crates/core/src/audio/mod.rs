//! Trait seams for the externally supplied audio capabilities.
//!
//! The sketch cores never touch an audio device directly. Playback control
//! and level sampling arrive through the [`AudioSource`] and [`LevelProbe`]
//! traits, and the one-shot browser-style "audio context" unlock arrives
//! through [`AudioActivation`]. The [`sim`] module provides an in-memory
//! implementation that drives the demo binary and the tests.

pub mod sim;

use std::{cell::RefCell, rc::Rc};

use crate::{config::AudioConfig, Result};

/// Playback commands understood by a looping audio resource.
///
/// `pause` suspends the resource in place so that a later `play` resumes
/// from the same position, while `stop` rewinds it to the beginning.
pub trait AudioSource {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
    fn set_volume(&mut self, volume: f32) -> Result<()>;
    fn set_loop(&mut self, looped: bool) -> Result<()>;
    fn is_playing(&self) -> Result<bool>;
}

/// Amplitude analyser bound to one audio resource.
pub trait LevelProbe {
    /// Returns the current activity level, nominally within [0, ~0.3].
    fn level(&self) -> Result<f32>;
}

/// One-time enablement of audio output, gated on a user gesture by the
/// host platform. The controller guarantees it is invoked at most once.
pub trait AudioActivation {
    fn activate(&mut self) -> Result<()>;
}

impl<F> AudioActivation for F
where
    F: FnMut() -> Result<()>,
{
    fn activate(&mut self) -> Result<()> {
        self()
    }
}

// Shared-handle forwarding so callers can keep a handle to a track after
// handing it to the controller (single-threaded frame loop, hence Rc).
impl<T: AudioSource + ?Sized> AudioSource for Rc<RefCell<T>> {
    fn play(&mut self) -> Result<()> {
        self.borrow_mut().play()
    }

    fn pause(&mut self) -> Result<()> {
        self.borrow_mut().pause()
    }

    fn stop(&mut self) -> Result<()> {
        self.borrow_mut().stop()
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        self.borrow_mut().set_volume(volume)
    }

    fn set_loop(&mut self, looped: bool) -> Result<()> {
        self.borrow_mut().set_loop(looped)
    }

    fn is_playing(&self) -> Result<bool> {
        self.borrow().is_playing()
    }
}

impl<T: LevelProbe + ?Sized> LevelProbe for Rc<RefCell<T>> {
    fn level(&self) -> Result<f32> {
        self.borrow().level()
    }
}

/// An audio-loop playback slot bound one-to-one with a zone.
///
/// Wraps the underlying track and applies the fixed channel configuration
/// (volume, looping, initially suspended) at setup time. Read accessors are
/// fail-safe: a track that cannot report its state is treated as silent.
#[derive(Debug)]
pub struct Channel<T> {
    track: T,
}

impl<T: AudioSource> Channel<T> {
    /// Configures a track as a zone channel: preset volume, looping
    /// enabled, playback suspended until the controller asks for it.
    pub fn prepare(mut track: T, config: &AudioConfig) -> Result<Self> {
        track.set_volume(config.volume.clamp(0.0, 1.0))?;
        track.set_loop(config.looped)?;
        track.pause()?;
        Ok(Self { track })
    }

    pub fn play(&mut self) -> Result<()> {
        self.track.play()
    }

    pub fn pause(&mut self) -> Result<()> {
        self.track.pause()
    }

    pub fn stop(&mut self) -> Result<()> {
        self.track.stop()
    }

    /// Whether the underlying track is audible right now. Degrades to
    /// `false` when the track cannot be queried.
    pub fn is_playing(&self) -> bool {
        self.track.is_playing().unwrap_or(false)
    }
}

impl<T: LevelProbe> Channel<T> {
    /// Current activity level; degrades to silence when the probe fails.
    pub fn level(&self) -> f32 {
        self.track.level().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SketchError;

    struct BrokenTrack;

    impl AudioSource for BrokenTrack {
        fn play(&mut self) -> Result<()> {
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            Ok(())
        }

        fn set_volume(&mut self, _volume: f32) -> Result<()> {
            Ok(())
        }

        fn set_loop(&mut self, _looped: bool) -> Result<()> {
            Ok(())
        }

        fn is_playing(&self) -> Result<bool> {
            Err(SketchError::msg("device lost"))
        }
    }

    impl LevelProbe for BrokenTrack {
        fn level(&self) -> Result<f32> {
            Err(SketchError::msg("device lost"))
        }
    }

    #[test]
    fn failed_reads_degrade_to_silence() {
        let channel = Channel::prepare(BrokenTrack, &AudioConfig::default()).unwrap();
        assert!(!channel.is_playing());
        assert_eq!(channel.level(), 0.0);
    }

    #[test]
    fn prepare_clamps_volume() {
        use std::{cell::RefCell, rc::Rc};

        let track = Rc::new(RefCell::new(sim::SimulatedTrack::tone(64, 2.0).unwrap()));
        let config = AudioConfig {
            volume: 1.8,
            looped: true,
        };
        let _channel = Channel::prepare(Rc::clone(&track), &config).unwrap();
        assert_eq!(track.borrow().volume(), 1.0);
    }
}
