//! Configuration for the hexscape viewer.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and tolerate missing or unknown fields so older and newer
//! files both load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, InputConfig, RenderConfig, TerrainConfig};
pub use error::ConfigError;
