//! Dual-zone audio arbitration for the mouse sketch.
//!
//! The interactive surface is split into a top and a bottom half, each
//! bound to one looping audio channel. [`ZoneAudioController`] owns both
//! channels and guarantees that at most one of them is playing at any
//! time. It is driven by exactly two entry points: [`on_pointer_update`]
//! once per render frame, and [`on_release`] once per completed click or
//! touch gesture. Audio output is gated behind a one-time user-gesture
//! activation, mirroring browser autoplay policy.
//!
//! [`on_pointer_update`]: ZoneAudioController::on_pointer_update
//! [`on_release`]: ZoneAudioController::on_release

use serde::{Deserialize, Serialize};

use crate::{
    audio::{AudioActivation, AudioSource, Channel, LevelProbe},
    config::AudioConfig,
    Result,
};

/// One of the two mutually exclusive playback regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Top,
    Bottom,
}

impl Zone {
    /// Maps a pointer position onto a zone. The split is the horizontal
    /// midline; a pointer sitting exactly on it belongs to the bottom
    /// half (fixed policy, the comparison is strictly less-than).
    pub fn from_pointer(pointer: Pointer) -> Self {
        if pointer.y < pointer.height / 2.0 {
            Zone::Top
        } else {
            Zone::Bottom
        }
    }
}

/// Pointer position sampled by the host each frame: the vertical
/// coordinate plus the current viewport height it is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub y: f32,
    pub height: f32,
}

impl Pointer {
    pub fn new(y: f32, height: f32) -> Self {
        Self { y, height }
    }
}

/// What the renderer should show for one channel this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelViz {
    /// Channel is audible; draw an activity circle sized from `level`.
    Live { level: f32 },
    /// Channel is the current one but playback is user-paused.
    Paused,
    /// Nothing to show for this channel.
    Hidden,
}

/// Arbitrates two looping audio channels by pointer position.
pub struct ZoneAudioController<T> {
    top: Channel<T>,
    bottom: Channel<T>,
    activation: Box<dyn AudioActivation>,
    started: bool,
    paused: bool,
    active_zone: Option<Zone>,
}

impl<T: AudioSource + LevelProbe> ZoneAudioController<T> {
    /// Builds the controller around two externally supplied tracks. Both
    /// are configured as zone channels (preset volume, looping, initially
    /// suspended); nothing plays until the activation gesture arrives.
    pub fn new(
        top_track: T,
        bottom_track: T,
        activation: Box<dyn AudioActivation>,
        config: &AudioConfig,
    ) -> Result<Self> {
        Ok(Self {
            top: Channel::prepare(top_track, config)?,
            bottom: Channel::prepare(bottom_track, config)?,
            activation,
            started: false,
            paused: false,
            active_zone: None,
        })
    }

    /// Per-frame pointer handler.
    ///
    /// Inert until the activation gesture has happened, and while the user
    /// has paused playback. Otherwise, a pointer that crossed the midline
    /// stops the old channel before starting the new one; a pointer that
    /// stayed on its side does nothing, so hovering never restarts a
    /// channel.
    pub fn on_pointer_update(&mut self, pointer: Pointer) -> Result<()> {
        if !self.started || self.paused {
            return Ok(());
        }

        let zone = Zone::from_pointer(pointer);
        if self.active_zone == Some(zone) {
            return Ok(());
        }

        // Stop before play, so both channels are never audible at once.
        if let Some(previous) = self.active_zone.take() {
            self.channel_mut(previous).stop()?;
        }
        self.channel_mut(zone).play()?;
        self.active_zone = Some(zone);
        Ok(())
    }

    /// Click/touch-release handler.
    ///
    /// The first release of the session performs the one-time audio
    /// activation and nothing else. Every later release toggles pause:
    /// entering pause suspends both channels in place, leaving pause
    /// re-reads the pointer and force-plays the channel for its current
    /// zone (tracks resume from where they were suspended).
    pub fn on_release(&mut self, pointer: Pointer) -> Result<()> {
        if !self.started {
            self.activation.activate()?;
            self.started = true;
            return Ok(());
        }

        self.paused = !self.paused;
        if self.paused {
            self.top.pause()?;
            self.bottom.pause()?;
        } else {
            let zone = Zone::from_pointer(pointer);
            self.channel_mut(zone).play()?;
            self.active_zone = Some(zone);
        }
        Ok(())
    }

    /// Visualization state for one channel this frame. Failed reads from
    /// the underlying track degrade to [`ChannelViz::Hidden`].
    pub fn viz_for(&self, zone: Zone) -> ChannelViz {
        let channel = self.channel(zone);
        if channel.is_playing() && !self.paused {
            ChannelViz::Live {
                level: channel.level(),
            }
        } else if self.paused && self.active_zone == Some(zone) {
            ChannelViz::Paused
        } else {
            ChannelViz::Hidden
        }
    }

    /// Whether the one-time activation gesture has happened yet.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Whether playback is currently user-paused.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// The zone most recently selected by pointer position, if any. The
    /// channel bound to this zone is the "current" one.
    pub fn active_zone(&self) -> Option<Zone> {
        self.active_zone
    }

    fn channel(&self, zone: Zone) -> &Channel<T> {
        match zone {
            Zone::Top => &self.top,
            Zone::Bottom => &self.bottom,
        }
    }

    fn channel_mut(&mut self, zone: Zone) -> &mut Channel<T> {
        match zone {
            Zone::Top => &mut self.top,
            Zone::Bottom => &mut self.bottom,
        }
    }
}

impl<T> std::fmt::Debug for ZoneAudioController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneAudioController")
            .field("started", &self.started)
            .field("paused", &self.paused)
            .field("active_zone", &self.active_zone)
            .finish()
    }
}
