//! Application-level errors.

use hexscape_config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    /// Creating a platform directory failed.
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A `--pan` token that names no command.
    #[error("unknown scripted command `{0}` (expected l, r, f, b or add)")]
    UnknownCommand(String),
}
