//! Key-down events to [`ViewerCommand`]s.
//!
//! Only the four pan actions and "add chunk" are meaningful. Any other key,
//! and every key release, maps to [`ViewerCommand::Ignore`].

use std::collections::HashMap;

use hexscape_world::{PanDirection, ViewerCommand};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::key_names::key_code_from_name;

/// Minimal description of a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub key: PhysicalKey,
    pub state: ElementState,
    /// OS auto-repeat. Repeats pan again, like holding the key in a browser.
    pub repeat: bool,
}

impl RawKeyEvent {
    pub fn pressed(code: KeyCode) -> Self {
        Self {
            key: PhysicalKey::Code(code),
            state: ElementState::Pressed,
            repeat: false,
        }
    }
}

/// A bindable viewer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    PanLeft,
    PanRight,
    PanForward,
    PanBack,
    AddChunk,
}

impl ViewerAction {
    pub const ALL: [ViewerAction; 5] = [
        ViewerAction::PanLeft,
        ViewerAction::PanRight,
        ViewerAction::PanForward,
        ViewerAction::PanBack,
        ViewerAction::AddChunk,
    ];

    /// Name used as the key in the `input.keybindings` config table.
    pub fn name(self) -> &'static str {
        match self {
            ViewerAction::PanLeft => "pan_left",
            ViewerAction::PanRight => "pan_right",
            ViewerAction::PanForward => "pan_forward",
            ViewerAction::PanBack => "pan_back",
            ViewerAction::AddChunk => "add_chunk",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn command(self) -> ViewerCommand {
        match self {
            ViewerAction::PanLeft => ViewerCommand::Pan(PanDirection::Left),
            ViewerAction::PanRight => ViewerCommand::Pan(PanDirection::Right),
            ViewerAction::PanForward => ViewerCommand::Pan(PanDirection::Forward),
            ViewerAction::PanBack => ViewerCommand::Pan(PanDirection::Back),
            ViewerAction::AddChunk => ViewerCommand::AddChunk,
        }
    }
}

/// Decodes a key press with the default bindings.
pub fn map_key(code: KeyCode) -> ViewerCommand {
    KeyBindings::default().command_for(RawKeyEvent::pressed(code))
}

/// Physical key to action table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, ViewerAction>,
}

impl Default for KeyBindings {
    /// Arrow keys pan; Space adds a chunk.
    fn default() -> Self {
        let keys = HashMap::from([
            (KeyCode::ArrowLeft, ViewerAction::PanLeft),
            (KeyCode::ArrowRight, ViewerAction::PanRight),
            (KeyCode::ArrowUp, ViewerAction::PanForward),
            (KeyCode::ArrowDown, ViewerAction::PanBack),
            (KeyCode::Space, ViewerAction::AddChunk),
        ]);
        Self { keys }
    }
}

impl KeyBindings {
    /// Defaults with per-action overrides applied.
    ///
    /// `overrides` maps action name to key name. An override replaces every
    /// default key of that action. Unknown action or key names are skipped
    /// with a warning.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut bindings = Self::default();
        for (action_name, key_name) in overrides {
            let Some(action) = ViewerAction::from_name(action_name) else {
                tracing::warn!(action = %action_name, "unknown action in keybindings; skipped");
                continue;
            };
            let Some(key) = key_code_from_name(key_name) else {
                tracing::warn!(key = %key_name, action = %action_name, "unknown key name; skipped");
                continue;
            };
            bindings.rebind(action, key);
        }
        bindings
    }

    /// Binds `key` as the only key for `action`.
    pub fn rebind(&mut self, action: ViewerAction, key: KeyCode) {
        self.keys.retain(|_, a| *a != action);
        self.keys.insert(key, action);
    }

    pub fn action_for(&self, key: PhysicalKey) -> Option<ViewerAction> {
        match key {
            PhysicalKey::Code(code) => self.keys.get(&code).copied(),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Keys bound to `action`, in no particular order.
    pub fn keys_for(&self, action: ViewerAction) -> Vec<KeyCode> {
        self.keys
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect()
    }

    /// Decodes one keyboard event.
    pub fn command_for(&self, event: RawKeyEvent) -> ViewerCommand {
        if event.state != ElementState::Pressed {
            return ViewerCommand::Ignore;
        }
        match self.action_for(event.key) {
            Some(action) => action.command(),
            None => {
                tracing::trace!(key = ?event.key, "unbound key ignored");
                ViewerCommand::Ignore
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::NativeKeyCode;

    use super::*;

    #[test]
    fn test_default_arrows_and_space() {
        let b = KeyBindings::default();
        let cases = [
            (KeyCode::ArrowLeft, ViewerCommand::Pan(PanDirection::Left)),
            (KeyCode::ArrowRight, ViewerCommand::Pan(PanDirection::Right)),
            (KeyCode::ArrowUp, ViewerCommand::Pan(PanDirection::Forward)),
            (KeyCode::ArrowDown, ViewerCommand::Pan(PanDirection::Back)),
            (KeyCode::Space, ViewerCommand::AddChunk),
        ];
        for (key, expected) in cases {
            assert_eq!(b.command_for(RawKeyEvent::pressed(key)), expected, "{key:?}");
        }
    }

    #[test]
    fn test_defaults_bind_one_key_per_action() {
        let b = KeyBindings::default();
        for action in ViewerAction::ALL {
            assert_eq!(b.keys_for(action).len(), 1, "{action:?}");
        }
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
            assert_eq!(b.command_for(RawKeyEvent::pressed(key)), ViewerCommand::Ignore);
        }
    }

    #[test]
    fn test_letter_keys_bind_through_overrides() {
        let overrides = HashMap::from([("pan_forward".to_string(), "KeyW".to_string())]);
        let b = KeyBindings::with_overrides(&overrides);
        assert_eq!(
            b.command_for(RawKeyEvent::pressed(KeyCode::KeyW)),
            ViewerCommand::Pan(PanDirection::Forward)
        );
        assert_eq!(b.command_for(RawKeyEvent::pressed(KeyCode::ArrowUp)), ViewerCommand::Ignore);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let b = KeyBindings::default();
        assert_eq!(b.command_for(RawKeyEvent::pressed(KeyCode::KeyQ)), ViewerCommand::Ignore);
        let unidentified = RawKeyEvent {
            key: PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            state: ElementState::Pressed,
            repeat: false,
        };
        assert_eq!(b.command_for(unidentified), ViewerCommand::Ignore);
    }

    #[test]
    fn test_release_is_ignored_and_repeat_pans() {
        let b = KeyBindings::default();
        let release = RawKeyEvent {
            state: ElementState::Released,
            ..RawKeyEvent::pressed(KeyCode::ArrowLeft)
        };
        assert_eq!(b.command_for(release), ViewerCommand::Ignore);
        let repeat = RawKeyEvent {
            repeat: true,
            ..RawKeyEvent::pressed(KeyCode::ArrowLeft)
        };
        assert_eq!(b.command_for(repeat), ViewerCommand::Pan(PanDirection::Left));
    }

    #[test]
    fn test_override_replaces_action_keys() {
        let overrides = HashMap::from([("add_chunk".to_string(), "Enter".to_string())]);
        let b = KeyBindings::with_overrides(&overrides);
        assert_eq!(b.command_for(RawKeyEvent::pressed(KeyCode::Space)), ViewerCommand::Ignore);
        assert_eq!(b.command_for(RawKeyEvent::pressed(KeyCode::Enter)), ViewerCommand::AddChunk);
        assert_eq!(b.keys_for(ViewerAction::AddChunk), vec![KeyCode::Enter]);
        // Other actions keep their defaults.
        assert_eq!(b.keys_for(ViewerAction::PanLeft), vec![KeyCode::ArrowLeft]);
    }

    #[test]
    fn test_invalid_overrides_are_skipped() {
        let overrides = HashMap::from([
            ("jump".to_string(), "Space".to_string()),
            ("pan_left".to_string(), "NotAKey".to_string()),
        ]);
        assert_eq!(KeyBindings::with_overrides(&overrides), KeyBindings::default());
    }

    #[test]
    fn test_map_key_uses_defaults() {
        assert_eq!(map_key(KeyCode::ArrowUp), ViewerCommand::Pan(PanDirection::Forward));
        assert_eq!(map_key(KeyCode::ArrowDown), ViewerCommand::Pan(PanDirection::Back));
        assert_eq!(map_key(KeyCode::Escape), ViewerCommand::Ignore);
    }

    #[test]
    fn test_action_names_round_trip() {
        for action in ViewerAction::ALL {
            assert_eq!(ViewerAction::from_name(action.name()), Some(action));
        }
        assert_eq!(ViewerAction::from_name("PanLeft"), None);
    }
}
