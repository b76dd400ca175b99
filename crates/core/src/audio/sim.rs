use crate::{
    audio::{AudioSource, LevelProbe},
    Result, SketchError,
};

/// A full-scale envelope maps to the top of the nominal level domain.
const LEVEL_FULL_SCALE: f32 = 0.3;
const DEFAULT_LEVEL_WINDOW: usize = 32;

/// In-memory stand-in for a decoded audio track.
///
/// Playback is modelled as a cursor over a looping amplitude envelope:
/// `pause` freezes the cursor in place, `stop` rewinds it, and the level
/// probe reports the RMS of the most recent window. This is what the demo
/// binary and the controller tests run against, so no audio device is
/// required.
#[derive(Debug, Clone)]
pub struct SimulatedTrack {
    envelope: Vec<f32>,
    cursor: usize,
    playing: bool,
    volume: f32,
    looped: bool,
    level_window: usize,
}

impl SimulatedTrack {
    /// Builds a track from a pre-computed amplitude envelope in [0, 1].
    pub fn new(envelope: Vec<f32>) -> Result<Self> {
        if envelope.is_empty() {
            return Err(SketchError::InvalidInput(
                "simulated track needs at least one envelope sample",
            ));
        }

        Ok(Self {
            envelope,
            cursor: 0,
            playing: false,
            volume: 1.0,
            looped: false,
            level_window: DEFAULT_LEVEL_WINDOW,
        })
    }

    /// Builds a rectified-sine envelope with the given number of cycles.
    pub fn tone(samples: usize, cycles: f32) -> Result<Self> {
        if samples == 0 {
            return Err(SketchError::InvalidInput(
                "simulated track needs at least one envelope sample",
            ));
        }

        let envelope = (0..samples)
            .map(|i| {
                let phase = 2.0 * std::f32::consts::PI * cycles * i as f32 / samples as f32;
                phase.sin().abs()
            })
            .collect();
        Self::new(envelope)
    }

    /// Moves the playback cursor forward. Has no effect while the track is
    /// paused or stopped. A non-looping track that reaches the end stops.
    pub fn advance(&mut self, frames: usize) {
        if !self.playing || frames == 0 {
            return;
        }

        let len = self.envelope.len();
        if self.looped {
            self.cursor = (self.cursor + frames) % len;
        } else if self.cursor + frames >= len {
            self.cursor = len - 1;
            self.playing = false;
        } else {
            self.cursor += frames;
        }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    fn window_rms(&self) -> f32 {
        let len = self.envelope.len();
        let window = self.level_window.min(len).max(1);
        let mut sum = 0.0;
        for offset in 0..window {
            let index = if self.looped {
                (self.cursor + len - offset) % len
            } else {
                self.cursor.saturating_sub(offset)
            };
            let sample = self.envelope[index];
            sum += sample * sample;
        }
        (sum / window as f32).sqrt()
    }
}

impl AudioSource for SimulatedTrack {
    fn play(&mut self) -> Result<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.playing = false;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.playing = false;
        self.cursor = 0;
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        self.volume = volume.clamp(0.0, 1.0);
        Ok(())
    }

    fn set_loop(&mut self, looped: bool) -> Result<()> {
        self.looped = looped;
        Ok(())
    }

    fn is_playing(&self) -> Result<bool> {
        Ok(self.playing)
    }
}

impl LevelProbe for SimulatedTrack {
    fn level(&self) -> Result<f32> {
        if !self.playing {
            return Ok(0.0);
        }

        Ok((self.window_rms() * self.volume * LEVEL_FULL_SCALE).clamp(0.0, LEVEL_FULL_SCALE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_tone() -> SimulatedTrack {
        let mut track = SimulatedTrack::tone(256, 4.0).unwrap();
        track.set_loop(true).unwrap();
        track.play().unwrap();
        track
    }

    #[test]
    fn pause_preserves_position() {
        let mut track = playing_tone();
        track.advance(100);
        let position = track.position();

        track.pause().unwrap();
        track.advance(50);
        assert_eq!(track.position(), position);

        track.play().unwrap();
        track.advance(10);
        assert_eq!(track.position(), position + 10);
    }

    #[test]
    fn stop_rewinds_to_start() {
        let mut track = playing_tone();
        track.advance(100);
        track.stop().unwrap();
        assert_eq!(track.position(), 0);
        assert!(!track.is_playing().unwrap());
    }

    #[test]
    fn looping_wraps_the_cursor() {
        let mut track = playing_tone();
        track.advance(300);
        assert_eq!(track.position(), 300 % 256);
        assert!(track.is_playing().unwrap());
    }

    #[test]
    fn non_looping_track_stops_at_the_end() {
        let mut track = SimulatedTrack::tone(64, 1.0).unwrap();
        track.play().unwrap();
        track.advance(200);
        assert!(!track.is_playing().unwrap());
    }

    #[test]
    fn level_is_silent_unless_playing() {
        let mut track = playing_tone();
        track.advance(64);
        assert!(track.level().unwrap() > 0.0);

        track.pause().unwrap();
        assert_eq!(track.level().unwrap(), 0.0);
    }

    #[test]
    fn level_stays_within_the_nominal_domain() {
        let mut track = playing_tone();
        track.set_volume(1.0).unwrap();
        for _ in 0..16 {
            track.advance(16);
            let level = track.level().unwrap();
            assert!((0.0..=LEVEL_FULL_SCALE).contains(&level));
        }
    }

    #[test]
    fn rejects_empty_envelopes() {
        assert!(SimulatedTrack::new(Vec::new()).is_err());
        assert!(SimulatedTrack::tone(0, 1.0).is_err());
    }
}
