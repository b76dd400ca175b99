use serde::{Deserialize, Serialize};

use crate::{mapping::LevelScale, Result, SketchError};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub viz: LevelScale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            audio: AudioConfig::default(),
            viz: LevelScale::default(),
        }
    }
}

impl AppConfig {
    /// Parses a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| SketchError::msg(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(SketchError::InvalidInput(
                "canvas dimensions must be positive",
            ));
        }
        if !self.audio.volume.is_finite() {
            return Err(SketchError::InvalidInput("volume must be a finite number"));
        }
        Ok(())
    }
}

/// Dimensions of the interactive surface the sketches run on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 850.0,
        }
    }
}

/// Configuration for the two looping audio channels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Channel volume in [0, 1]; values outside the range are clamped at
    /// channel setup time.
    pub volume: f32,
    /// Whether channels loop when they reach the end of their material.
    pub looped: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 0.7,
            looped: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sketch_constants() {
        let config = AppConfig::default();
        assert_eq!(config.canvas.width, 400.0);
        assert_eq!(config.canvas.height, 850.0);
        assert_eq!(config.audio.volume, 0.7);
        assert!(config.audio.looped);
    }

    #[test]
    fn round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = AppConfig::from_json(&json).unwrap();
        assert_eq!(parsed.audio.volume, config.audio.volume);
        assert_eq!(parsed.canvas.height, config.canvas.height);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed = AppConfig::from_json("{}").unwrap();
        assert_eq!(parsed.audio.volume, 0.7);
    }

    #[test]
    fn rejects_degenerate_canvas() {
        let json = r#"{"canvas": {"width": 0.0, "height": 850.0}}"#;
        assert!(AppConfig::from_json(json).is_err());
    }
}
