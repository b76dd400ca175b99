//! Device-orientation readout for the sensor sketch.
//!
//! Mobile browsers gate motion sensors behind a permission prompt that
//! must be answered from a tap. [`OrientationMonitor`] models that latch
//! and turns raw rotation angles into the readout lines the sketch shows
//! in its debug panel.

use serde::{Deserialize, Serialize};

/// Rotations are treated as level within this dead zone.
const TILT_THRESHOLD_DEGREES: f32 = 10.0;

/// One sample of device orientation, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrientationFrame {
    /// Tilt forward/back.
    pub rotation_x: f32,
    /// Tilt left/right.
    pub rotation_y: f32,
    /// Turn around the vertical axis (compass heading).
    pub rotation_z: f32,
}

/// Forward/back tilt classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitchTilt {
    Forward,
    Backward,
    Level,
}

/// Left/right tilt classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollTilt {
    Left,
    Right,
    Level,
}

impl OrientationFrame {
    /// Positive X rotation is the device leaning back towards the user.
    pub fn pitch_tilt(&self) -> PitchTilt {
        if self.rotation_x > TILT_THRESHOLD_DEGREES {
            PitchTilt::Backward
        } else if self.rotation_x < -TILT_THRESHOLD_DEGREES {
            PitchTilt::Forward
        } else {
            PitchTilt::Level
        }
    }

    /// Positive Y rotation is the device leaning to its right edge.
    pub fn roll_tilt(&self) -> RollTilt {
        if self.rotation_y > TILT_THRESHOLD_DEGREES {
            RollTilt::Right
        } else if self.rotation_y < -TILT_THRESHOLD_DEGREES {
            RollTilt::Left
        } else {
            RollTilt::Level
        }
    }
}

/// What the sketch should show for one frame of sensor data.
#[derive(Debug, Clone, PartialEq)]
pub enum OrientationReport {
    /// Sensors not yet enabled; prompt the user to tap.
    WaitingForPermission,
    Reading {
        frame: OrientationFrame,
        pitch: PitchTilt,
        roll: RollTilt,
    },
}

impl OrientationReport {
    /// Renders the report as the debug-panel lines the sketch prints.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::WaitingForPermission => vec![
                "Waiting for sensor permissions...".to_string(),
                "Tap the screen to enable sensors".to_string(),
            ],
            Self::Reading { frame, pitch, roll } => {
                let mut lines = vec![
                    "--- Device Orientation ---".to_string(),
                    format!(
                        "Rotation X (Tilt Forward/Back): {}\u{b0}",
                        frame.rotation_x as i32
                    ),
                    format!(
                        "Rotation Y (Tilt Left/Right): {}\u{b0}",
                        frame.rotation_y as i32
                    ),
                    format!(
                        "Rotation Z (Turn/Compass): {}\u{b0}",
                        frame.rotation_z as i32
                    ),
                ];
                match pitch {
                    PitchTilt::Backward => lines.push("  Tilted BACKWARD".to_string()),
                    PitchTilt::Forward => lines.push("  Tilted FORWARD".to_string()),
                    PitchTilt::Level => {}
                }
                match roll {
                    RollTilt::Right => lines.push("  Tilted RIGHT".to_string()),
                    RollTilt::Left => lines.push("  Tilted LEFT".to_string()),
                    RollTilt::Level => {}
                }
                lines
            }
        }
    }
}

/// Permission latch plus per-frame classification.
#[derive(Debug, Default)]
pub struct OrientationMonitor {
    enabled: bool,
}

impl OrientationMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the host once the platform permission prompt has been
    /// answered. Like audio activation, this is a one-way latch.
    pub fn grant_permission(&mut self) {
        self.enabled = true;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Classifies a sensor frame, or reports the permission prompt while
    /// sensors are still locked.
    pub fn report(&self, frame: OrientationFrame) -> OrientationReport {
        if !self.enabled {
            return OrientationReport::WaitingForPermission;
        }

        OrientationReport::Reading {
            frame,
            pitch: frame.pitch_tilt(),
            roll: frame.roll_tilt(),
        }
    }
}
