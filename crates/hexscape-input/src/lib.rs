//! Keyboard input for the viewer: physical key codes mapped to viewer commands.

mod bindings;
mod key_names;

pub use bindings::{KeyBindings, RawKeyEvent, ViewerAction, map_key};
pub use key_names::key_code_from_name;
