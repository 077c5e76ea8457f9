//! Per-key tap-hold timing, consumed by the host's tap-hold resolution.

use embassy_time::Duration;

use crate::action::{Action, KeyAction};
use crate::encoding::decode;
use crate::keycode::{HidKeyCode, KeyCode};

/// Configurations for tap hold behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapHoldConfig {
    /// Tapping term of ordinary tap-hold keys
    pub tapping_term: Duration,
    /// Tapping term of home-row mods
    pub home_row_term: Duration,
    /// A second press within this time after a tap repeats the tap instead of holding
    pub quick_tap_term: Duration,
    /// A tap-hold key pressed within this time after another key is a tap
    pub flow_tap_term: Duration,
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TapHoldConfig {
    pub const fn new() -> Self {
        Self {
            tapping_term: Duration::from_millis(200),
            home_row_term: Duration::from_millis(280),
            quick_tap_term: Duration::from_millis(200),
            flow_tap_term: Duration::from_millis(150),
        }
    }

    /// Tapping term of a key
    pub fn tapping_term(&self, raw: u16) -> Duration {
        if is_home_row_mod(raw) {
            self.home_row_term
        } else {
            self.tapping_term
        }
    }
}

/// Mod-tap of a letter, holding at least one of ctrl, shift, alt or gui
pub fn is_home_row_mod(raw: u16) -> bool {
    match decode(raw) {
        KeyAction::TapHold(Action::Key(KeyCode::Hid(k)), Action::Modifier(m)) => k.is_letter() && !m.is_empty(),
        _ => false,
    }
}

/// Layer-tap keys hold when another key is tapped inside them
pub fn permissive_hold(raw: u16) -> bool {
    matches!(decode(raw), KeyAction::TapHold(_, Action::LayerOn(_)))
}

/// Chordal hold: home-row mods settle as hold as soon as another key is pressed.
///
/// Thumb shifts (shift over Tab, Delete or a repeat key) don't.
pub fn hold_on_other_key_press(raw: u16) -> bool {
    match decode(raw) {
        KeyAction::TapHold(Action::Key(KeyCode::Hid(HidKeyCode::Tab | HidKeyCode::Delete)), _) => false,
        KeyAction::TapHold(Action::Key(KeyCode::Special(_)), _) => false,
        _ => is_home_row_mod(raw),
    }
}
