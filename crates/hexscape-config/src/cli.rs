//! Command-line argument parsing for the hexscape viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Hexscape command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "hexscape", about = "Procedural hex terrain viewer")]
pub struct CliArgs {
    /// Noise seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Cells per chunk side.
    #[arg(long)]
    pub chunk_width: Option<u32>,

    /// Noise octaves (1 disables the multi-octave layer).
    #[arg(long)]
    pub octaves: Option<u32>,

    /// World units moved per pan step.
    #[arg(long)]
    pub pan_step: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scripted commands, comma separated: l, r, f, b, add.
    #[arg(long, value_delimiter = ',')]
    pub pan: Vec<String>,

    /// Number of frames to run before exiting.
    #[arg(long, default_value_t = 120)]
    pub frames: u64,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(width) = args.chunk_width {
            self.terrain.chunk_width = width;
        }
        if let Some(octaves) = args.octaves {
            self.terrain.octaves = octaves;
        }
        if let Some(step) = args.pan_step {
            self.camera.pan_step = step;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(7),
            chunk_width: Some(16),
            octaves: Some(1),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.terrain.seed, 7);
        assert_eq!(config.terrain.chunk_width, 16);
        assert_eq!(config.terrain.octaves, 1);
        // Untouched values keep defaults.
        assert_eq!(config.camera.pan_step, 10.0);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_overrides() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_parse() {
        let args = CliArgs::parse_from([
            "hexscape",
            "--seed",
            "3",
            "--log-level",
            "debug",
            "--pan",
            "l,l,f,add",
            "--frames",
            "10",
        ]);
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.pan, vec!["l", "l", "f", "add"]);
        assert_eq!(args.frames, 10);
    }

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::parse_from(["hexscape"]);
        assert!(args.seed.is_none());
        assert!(args.pan.is_empty());
        assert_eq!(args.frames, 120);
    }
}
