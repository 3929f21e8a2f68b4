//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Noise and chunk generation.
    pub terrain: TerrainConfig,
    /// Pan step and projection.
    pub camera: CameraConfig,
    /// Colors, water plane and light.
    pub render: RenderConfig,
    /// Key binding overrides.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Seed for the noise permutation table.
    pub seed: u32,
    /// Cells per chunk side.
    pub chunk_width: u32,
    /// Noise octaves; `1` disables the multi-octave layer.
    pub octaves: u32,
    /// Amplitude falloff between octaves.
    pub persistence: f64,
    /// Frequency of the first octave in cycles per cell.
    pub base_scale: f64,
    /// Height of a full-scale noise value in world units.
    pub amplitude: f64,
}

/// Camera settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// World units moved per pan key press.
    pub pan_step: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Eye position before the pan offset is applied.
    pub eye_anchor: [f32; 3],
    /// Look-at target before the pan offset is applied.
    pub target_anchor: [f32; 3],
}

/// Render interface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Flat RGB color of terrain chunks.
    pub terrain_color: [f32; 3],
    /// Flat RGB color of the water plane.
    pub water_color: [f32; 3],
    /// Half-size of the water plane.
    pub water_extent: f32,
    /// Height of the water plane.
    pub water_height: f32,
    /// Light vector before normalization.
    pub light_direction: [f32; 3],
    /// Window aspect ratio used for the projection matrix.
    pub aspect_ratio: f32,
}

/// Input configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keybinding overrides (action name -> key name).
    pub keybindings: HashMap<String, String>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Report frames per second in the log.
    pub show_fps: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            chunk_width: 32,
            octaves: 4,
            persistence: 0.5,
            base_scale: 0.05,
            amplitude: 4.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pan_step: 10.0,
            fov_y_degrees: 45.0,
            near: 0.01,
            far: 100.0,
            eye_anchor: [0.0, 30.0, 40.0],
            target_anchor: [0.0, 0.0, 0.0],
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            terrain_color: [0.35, 0.6, 0.25],
            water_color: [0.15, 0.35, 0.7],
            water_extent: 1000.0,
            water_height: 0.0,
            light_direction: [-1.0, -8.0, -3.0],
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_fps: true,
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

impl Config {
    /// Rejects values the generator or camera cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terrain.chunk_width == 0 {
            return Err(ConfigError::Invalid {
                field: "terrain.chunk_width",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.terrain.persistence.is_nan() || self.terrain.persistence <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "terrain.persistence",
                reason: format!("must be positive, got {}", self.terrain.persistence),
            });
        }
        let (near, far) = (self.camera.near, self.camera.far);
        if near.is_nan() || far.is_nan() || near <= 0.0 || far <= near {
            return Err(ConfigError::Invalid {
                field: "camera.far",
                reason: format!("need 0 < near < far, got near={near} far={far}"),
            });
        }
        if self.render.light_direction == [0.0; 3] {
            return Err(ConfigError::Invalid {
                field: "render.light_direction",
                reason: "must not be the zero vector".to_string(),
            });
        }
        Ok(())
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_terrain() {
        let config = Config::default();
        assert_eq!(config.terrain.seed, 1);
        assert_eq!(config.terrain.chunk_width, 32);
        assert_eq!(config.terrain.octaves, 4);
        assert_eq!(config.terrain.persistence, 0.5);
        assert_eq!(config.terrain.amplitude, 4.0);
        assert_eq!(config.camera.pan_step, 10.0);
        assert_eq!(config.camera.fov_y_degrees, 45.0);
        assert_eq!(config.render.light_direction, [-1.0, -8.0, -3.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("chunk_width: 32"));
        assert!(ron_str.contains("seed: 1"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(terrain: (seed: 9), camera: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.terrain.seed, 9);
        assert_eq!(config.terrain.chunk_width, 32);
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_keybinding_overrides_parse() {
        let ron_str = r#"(input: (keybindings: {"add_chunk": "Enter"}))"#;
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(
            config.input.keybindings.get("add_chunk").map(String::as_str),
            Some("Enter")
        );
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let mut config = Config::default();
        config.terrain.chunk_width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "terrain.chunk_width",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_clip_planes() {
        let mut config = Config::default();
        config.camera.far = 0.001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.seed = 42;
        config.camera.pan_step = 5.0;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_load_rejects_invalid_saved_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.chunk_width = 0;
        config.save(dir.path()).unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
