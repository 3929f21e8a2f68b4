//! Hexscape viewer application: platform directories, the frame clock and a
//! headless session that drives the world and render crates.

pub mod error;
pub mod frame_clock;
pub mod platform;
pub mod script;
pub mod session;

pub use error::AppError;
