//! Core library for the interactive sketch collection.
//!
//! Each module owns the state and rules of one sketch: `controller`
//! arbitrates the two looping audio zones of the mouse sketch, `sensors`
//! classifies device orientation, and `touch` tracks touch state. The
//! pieces that belong to a host platform — audio playback, canvas
//! drawing, sensor access — sit behind the trait seams in `audio` and the
//! instruction lists in `render`, so the cores stay deterministic and
//! testable.

pub mod audio;
pub mod config;
pub mod controller;
pub mod error;
pub mod mapping;
pub mod render;
pub mod sensors;
pub mod touch;

pub use audio::{sim::SimulatedTrack, AudioActivation, AudioSource, Channel, LevelProbe};
pub use config::{AppConfig, AudioConfig, CanvasConfig};
pub use controller::{ChannelViz, Pointer, Zone, ZoneAudioController};
pub use error::{Result, SketchError};
pub use mapping::LevelScale;
pub use render::{Banner, FramePlan, Instruction};
pub use sensors::{OrientationFrame, OrientationMonitor, OrientationReport, PitchTilt, RollTilt};
pub use touch::{TouchSummary, TouchTracker};
