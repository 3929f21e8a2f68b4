//! String names for the physical keys the viewer can bind.
//!
//! Names match the `Debug` output of [`KeyCode`] (`"ArrowLeft"`, `"KeyW"`),
//! which is how bindings are written in the config file.

use winit::keyboard::KeyCode;

/// Parses a key name. Returns `None` for keys the viewer does not bind.
pub fn key_code_from_name(name: &str) -> Option<KeyCode> {
    Some(match name {
        "KeyA" => KeyCode::KeyA,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyH" => KeyCode::KeyH,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyN" => KeyCode::KeyN,
        "KeyQ" => KeyCode::KeyQ,
        "KeyS" => KeyCode::KeyS,
        "KeyW" => KeyCode::KeyW,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "Numpad2" => KeyCode::Numpad2,
        "Numpad4" => KeyCode::Numpad4,
        "Numpad6" => KeyCode::Numpad6,
        "Numpad8" => KeyCode::Numpad8,
        "NumpadAdd" => KeyCode::NumpadAdd,
        _ => return None,
    })
}
