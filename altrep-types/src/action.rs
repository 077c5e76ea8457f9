//! Key actions as stored in a keymap.
//!
//! Key types:
//! - [`Action`] - Single operations that a key sends or executes
//! - [`KeyAction`] - What a key position does, including tap-hold

use crate::keycode::{KeyCode, KeyIdentity};
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action
    #[default]
    No,
    /// Transparent action, next layer will be checked
    Transparent,
    /// A single action, such as triggering a key, or activating a layer
    Single(Action),
    /// Tap-hold action: the first action is sent on tap, the second is held
    TapHold(Action, Action),
}

impl KeyAction {
    /// Returns `true` if this key is a tap-hold key
    pub fn is_tap_hold(&self) -> bool {
        matches!(self, KeyAction::TapHold(_, _))
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke
    Key(KeyCode),
    /// Key stroke with modifier combination triggered
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Modifier combination, used by the hold part of mod-tap keys
    Modifier(ModifierCombination),
    /// Activate a layer while held
    LayerOn(u8),
    /// Set the default layer, which also selects the active profile
    DefaultLayer(u8),
}

impl Action {
    /// The key identity this action types, if it types a key at all
    pub fn identity(&self) -> Option<KeyIdentity> {
        match *self {
            Action::Key(key) => Some(KeyIdentity::new(key, ModifierCombination::new())),
            Action::KeyWithModifier(key, modifiers) => Some(KeyIdentity::new(key, modifiers)),
            _ => None,
        }
    }
}

impl From<KeyIdentity> for Action {
    fn from(identity: KeyIdentity) -> Self {
        if identity.modifiers.to_payload() == 0 {
            Action::Key(identity.key)
        } else {
            Action::KeyWithModifier(identity.key, identity.modifiers)
        }
    }
}
