use serde::{Deserialize, Serialize};

/// Contract between the level probe and the renderer: a clamped linear
/// map from the nominal activity-level domain onto a circle diameter in
/// display units. The exact easing a renderer applies on top of this is
/// its own business; this type only guarantees the bounded domain and
/// range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelScale {
    /// Upper end of the level domain; anything above maps to `max_diameter`.
    pub level_ceiling: f32,
    pub min_diameter: f32,
    pub max_diameter: f32,
    /// Fixed diameter of the static circle shown while paused.
    pub paused_diameter: f32,
}

impl Default for LevelScale {
    fn default() -> Self {
        Self {
            level_ceiling: 0.3,
            min_diameter: 30.0,
            max_diameter: 100.0,
            paused_diameter: 50.0,
        }
    }
}

impl LevelScale {
    /// Maps an activity level onto a display diameter, clamping at both
    /// ends of the range.
    pub fn diameter_for(&self, level: f32) -> f32 {
        if self.level_ceiling <= 0.0 {
            return self.min_diameter;
        }

        let t = (level / self.level_ceiling).clamp(0.0, 1.0);
        self.min_diameter + t * (self.max_diameter - self.min_diameter)
    }

}
