//! Compact 16-bit keycode codec.
//!
//! Keymaps deliver keys as packed `u16` values in the quantum keycode layout:
//!
//! | range              | meaning                                           |
//! |--------------------|---------------------------------------------------|
//! | `0x0000`           | no key                                            |
//! | `0x0001`           | transparent                                       |
//! | `0x0002..=0x00FF`  | plain HID key                                     |
//! | `0x0100..=0x1FFF`  | key with modifiers, modifier bits at 8..13        |
//! | `0x2000..=0x3FFF`  | mod-tap, hold modifiers at 8..13, tap key at 0..8 |
//! | `0x4000..=0x4FFF`  | layer-tap, hold layer at 8..12, tap key at 0..8   |
//! | `0x5220..=0x523F`  | momentary layer                                   |
//! | `0x5240..=0x525F`  | set default layer                                 |
//! | `0x7C79`           | repeat key                                        |
//! | `0x7C7A`           | alternate-repeat key                              |
//!
//! Anything else is opaque and kept as [`KeyCode::Other`].
//!
//! ## Tap payload escape
//!
//! The tap payload of a tap-hold key holds 8 bits, which can't store the
//! repeat keys. They are written as [`REPEAT_TAP_SENTINEL`] and
//! [`ALT_REPEAT_TAP_SENTINEL`] instead, and read back as the repeat keys.
//! The HID keys sharing those values, [`HidKeyCode::Again`] and
//! [`HidKeyCode::Undo`], can't be used as a tap action; [`encode`] rejects
//! them with [`EncodeError::ReservedTapPayload`].

use crate::action::{Action, KeyAction};
use crate::keycode::{HidKeyCode, KeyCode, KeyIdentity, SpecialKey};
use crate::modifier::ModifierCombination;

pub const QK_BASIC_MAX: u16 = 0x00FF;
pub const QK_MODS: u16 = 0x0100;
pub const QK_MODS_MAX: u16 = 0x1FFF;
pub const QK_MOD_TAP: u16 = 0x2000;
pub const QK_MOD_TAP_MAX: u16 = 0x3FFF;
pub const QK_LAYER_TAP: u16 = 0x4000;
pub const QK_LAYER_TAP_MAX: u16 = 0x4FFF;
pub const QK_MOMENTARY: u16 = 0x5220;
pub const QK_MOMENTARY_MAX: u16 = 0x523F;
pub const QK_DEF_LAYER: u16 = 0x5240;
pub const QK_DEF_LAYER_MAX: u16 = 0x525F;
pub const QK_REPEAT_KEY: u16 = 0x7C79;
pub const QK_ALT_REPEAT_KEY: u16 = 0x7C7A;

/// Tap payload standing for [`QK_REPEAT_KEY`]
pub const REPEAT_TAP_SENTINEL: u8 = 0x79;
/// Tap payload standing for [`QK_ALT_REPEAT_KEY`]
pub const ALT_REPEAT_TAP_SENTINEL: u8 = 0x7A;

/// Highest layer a layer-tap key can hold
pub const MAX_LAYER_TAP_LAYER: u8 = 0x0F;
/// Highest layer a momentary or default layer key can address
pub const MAX_LAYER: u8 = 0x1F;

/// Errors when packing a [`KeyAction`] into 16 bits
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// The HID key shares its code with a tap payload sentinel
    ReservedTapPayload(HidKeyCode),
    /// The keycode doesn't fit in the 8-bit payload
    PayloadOutOfRange(u16),
    /// The layer doesn't fit in the layer field
    LayerOutOfRange(u8),
    /// The action has no packed representation
    Unsupported,
}

/// Pack a key action into a 16-bit keycode.
pub fn encode(action: KeyAction) -> Result<u16, EncodeError> {
    match action {
        KeyAction::No => Ok(0x0000),
        KeyAction::Transparent => Ok(0x0001),
        KeyAction::Single(a) => encode_action(a),
        KeyAction::TapHold(tap, hold) => {
            let payload = encode_tap_payload(tap)? as u16;
            match hold {
                Action::Modifier(m) if !m.is_empty() => Ok(QK_MOD_TAP | ((m.to_payload() as u16) << 8) | payload),
                Action::LayerOn(layer) if layer <= MAX_LAYER_TAP_LAYER => {
                    Ok(QK_LAYER_TAP | ((layer as u16) << 8) | payload)
                }
                Action::LayerOn(layer) => Err(EncodeError::LayerOutOfRange(layer)),
                _ => Err(EncodeError::Unsupported),
            }
        }
    }
}

/// Pack a key identity, as a plain or modified key.
pub fn encode_identity(identity: KeyIdentity) -> Result<u16, EncodeError> {
    encode(KeyAction::Single(Action::from(identity)))
}

fn encode_action(action: Action) -> Result<u16, EncodeError> {
    match action {
        Action::Key(KeyCode::Hid(HidKeyCode::ErrorRollover)) => Err(EncodeError::Unsupported),
        Action::Key(KeyCode::Hid(k)) => Ok(k as u16),
        Action::Key(KeyCode::Special(SpecialKey::Repeat)) => Ok(QK_REPEAT_KEY),
        Action::Key(KeyCode::Special(SpecialKey::AltRepeat)) => Ok(QK_ALT_REPEAT_KEY),
        Action::Key(KeyCode::Other(raw)) => Ok(raw),
        Action::KeyWithModifier(key, m) if m.to_payload() == 0 => encode_action(Action::Key(key)),
        Action::KeyWithModifier(key, m) => {
            let code = match key {
                KeyCode::Hid(k) => k as u16,
                KeyCode::Other(raw) if raw <= QK_BASIC_MAX => raw,
                KeyCode::Other(raw) => return Err(EncodeError::PayloadOutOfRange(raw)),
                KeyCode::Special(_) => return Err(EncodeError::Unsupported),
            };
            Ok(((m.to_payload() as u16) << 8) | code)
        }
        Action::Modifier(m) if m.is_empty() => Err(EncodeError::Unsupported),
        Action::Modifier(m) => Ok((m.to_payload() as u16) << 8),
        Action::LayerOn(layer) if layer <= MAX_LAYER => Ok(QK_MOMENTARY | layer as u16),
        Action::DefaultLayer(layer) if layer <= MAX_LAYER => Ok(QK_DEF_LAYER | layer as u16),
        Action::LayerOn(layer) | Action::DefaultLayer(layer) => Err(EncodeError::LayerOutOfRange(layer)),
    }
}

fn encode_tap_payload(tap: Action) -> Result<u8, EncodeError> {
    match tap {
        Action::Key(KeyCode::Hid(k @ (HidKeyCode::Again | HidKeyCode::Undo))) => {
            Err(EncodeError::ReservedTapPayload(k))
        }
        Action::Key(KeyCode::Hid(k)) => Ok(k as u8),
        Action::Key(KeyCode::Special(SpecialKey::Repeat)) => Ok(REPEAT_TAP_SENTINEL),
        Action::Key(KeyCode::Special(SpecialKey::AltRepeat)) => Ok(ALT_REPEAT_TAP_SENTINEL),
        // Only codes that don't name a known HID key, otherwise they'd decode differently
        Action::Key(KeyCode::Other(raw)) if raw <= QK_BASIC_MAX && HidKeyCode::from_repr(raw as u8).is_none() => {
            Ok(raw as u8)
        }
        Action::Key(KeyCode::Other(raw)) => Err(EncodeError::PayloadOutOfRange(raw)),
        _ => Err(EncodeError::Unsupported),
    }
}

/// Unpack a 16-bit keycode. Never fails, unknown codes become [`KeyCode::Other`].
pub fn decode(raw: u16) -> KeyAction {
    match raw {
        0x0000 => KeyAction::No,
        0x0001 => KeyAction::Transparent,
        0x0002..=QK_BASIC_MAX => KeyAction::Single(Action::Key(basic_key(raw as u8))),
        QK_MODS..=QK_MODS_MAX => {
            let modifiers = ModifierCombination::from_payload((raw >> 8) as u8);
            match raw as u8 {
                0 => KeyAction::Single(Action::Modifier(modifiers)),
                code => KeyAction::Single(Action::KeyWithModifier(basic_key(code), modifiers)),
            }
        }
        QK_MOD_TAP..=QK_MOD_TAP_MAX => {
            let modifiers = ModifierCombination::from_payload((raw >> 8) as u8);
            KeyAction::TapHold(Action::Key(tap_key(raw as u8)), Action::Modifier(modifiers))
        }
        QK_LAYER_TAP..=QK_LAYER_TAP_MAX => {
            let layer = ((raw >> 8) as u8) & MAX_LAYER_TAP_LAYER;
            KeyAction::TapHold(Action::Key(tap_key(raw as u8)), Action::LayerOn(layer))
        }
        QK_MOMENTARY..=QK_MOMENTARY_MAX => KeyAction::Single(Action::LayerOn((raw - QK_MOMENTARY) as u8)),
        QK_DEF_LAYER..=QK_DEF_LAYER_MAX => KeyAction::Single(Action::DefaultLayer((raw - QK_DEF_LAYER) as u8)),
        QK_REPEAT_KEY => KeyAction::Single(Action::Key(KeyCode::Special(SpecialKey::Repeat))),
        QK_ALT_REPEAT_KEY => KeyAction::Single(Action::Key(KeyCode::Special(SpecialKey::AltRepeat))),
        _ => KeyAction::Single(Action::Key(KeyCode::Other(raw))),
    }
}

fn basic_key(code: u8) -> KeyCode {
    match HidKeyCode::from_repr(code) {
        Some(k) => KeyCode::Hid(k),
        None => KeyCode::Other(code as u16),
    }
}

fn tap_key(code: u8) -> KeyCode {
    match code {
        REPEAT_TAP_SENTINEL => KeyCode::Special(SpecialKey::Repeat),
        ALT_REPEAT_TAP_SENTINEL => KeyCode::Special(SpecialKey::AltRepeat),
        _ => basic_key(code),
    }
}

/// The identity of a raw keycode as if it were typed as a plain keystroke.
///
/// Tap-hold keys yield their tap action. No-op and transparent keys yield
/// [`KeyIdentity::NONE`]. Keys which type nothing (layer keys, bare
/// modifier combinations) keep their raw value as [`KeyCode::Other`].
pub fn unwrap(raw: u16) -> KeyIdentity {
    match decode(raw) {
        KeyAction::No | KeyAction::Transparent => KeyIdentity::NONE,
        KeyAction::Single(action) | KeyAction::TapHold(action, _) => action
            .identity()
            .unwrap_or(KeyIdentity::new(KeyCode::Other(raw), ModifierCombination::new())),
    }
}

/// Returns `true` if the raw keycode is a tap-hold key whose tap action is a repeat key
pub fn is_repeat_tap_hold(raw: u16) -> bool {
    match decode(raw) {
        KeyAction::TapHold(tap, _) => matches!(tap, Action::Key(KeyCode::Special(_))),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{CTRL, SHIFT};

    fn all_hid_keys() -> impl Iterator<Item = HidKeyCode> {
        (0..=u8::MAX).filter_map(HidKeyCode::from_repr)
    }

    #[test]
    fn test_decode_ranges() {
        assert_eq!(decode(0x0000), KeyAction::No);
        assert_eq!(decode(0x0001), KeyAction::Transparent);
        assert_eq!(decode(0x0004), KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A))));
        assert_eq!(
            decode(0x0237),
            KeyAction::Single(Action::KeyWithModifier(KeyCode::Hid(HidKeyCode::Dot), SHIFT))
        );
        assert_eq!(
            decode(0x222B),
            KeyAction::TapHold(Action::Key(KeyCode::Hid(HidKeyCode::Tab)), Action::Modifier(SHIFT))
        );
        assert_eq!(
            decode(0x4315),
            KeyAction::TapHold(Action::Key(KeyCode::Hid(HidKeyCode::R)), Action::LayerOn(3))
        );
        assert_eq!(decode(0x5224), KeyAction::Single(Action::LayerOn(4)));
        assert_eq!(decode(0x5241), KeyAction::Single(Action::DefaultLayer(1)));
        assert_eq!(decode(0x7C00), KeyAction::Single(Action::Key(KeyCode::Other(0x7C00))));
    }

    #[test]
    fn test_repeat_keys_in_tap_payload() {
        // Shift mod-tap of the alternate-repeat key
        let raw = encode(KeyAction::TapHold(
            Action::Key(KeyCode::Special(SpecialKey::AltRepeat)),
            Action::Modifier(SHIFT),
        ))
        .unwrap();
        assert_eq!(raw, 0x227A);
        assert_eq!(unwrap(raw), KeyIdentity::ALT_REPEAT);
        assert!(is_repeat_tap_hold(raw));

        // Layer-tap uses the same escape
        let raw = encode(KeyAction::TapHold(
            Action::Key(KeyCode::Special(SpecialKey::Repeat)),
            Action::LayerOn(6),
        ))
        .unwrap();
        assert_eq!(raw, 0x4679);
        assert_eq!(unwrap(raw), KeyIdentity::REPEAT);
    }

    #[test]
    fn test_reserved_tap_payload() {
        for k in [HidKeyCode::Again, HidKeyCode::Undo] {
            assert_eq!(
                encode(KeyAction::TapHold(Action::Key(k.into()), Action::Modifier(CTRL))),
                Err(EncodeError::ReservedTapPayload(k))
            );
        }
        // As plain keys they are fine
        assert_eq!(encode(KeyAction::Single(Action::Key(HidKeyCode::Undo.into()))), Ok(0x007A));
        assert_eq!(unwrap(0x007A), KeyIdentity::hid(HidKeyCode::Undo));
    }

    #[test]
    fn test_tap_hold_round_trip() {
        for k in all_hid_keys().filter(|k| !matches!(k, HidKeyCode::Again | HidKeyCode::Undo)) {
            let mod_tap = encode(KeyAction::TapHold(Action::Key(k.into()), Action::Modifier(SHIFT))).unwrap();
            assert_eq!(unwrap(mod_tap), KeyIdentity::hid(k), "mod-tap {:?}", k);
            let layer_tap = encode(KeyAction::TapHold(Action::Key(k.into()), Action::LayerOn(2))).unwrap();
            assert_eq!(unwrap(layer_tap), KeyIdentity::hid(k), "layer-tap {:?}", k);
        }
    }

    #[test]
    fn test_identity_round_trip() {
        for k in all_hid_keys().filter(|k| !matches!(k, HidKeyCode::No | HidKeyCode::ErrorRollover)) {
            for m in [ModifierCombination::new(), SHIFT, CTRL | SHIFT] {
                let identity = KeyIdentity::hid(k).with_modifiers(m);
                let raw = encode_identity(identity).unwrap();
                assert_eq!(unwrap(raw), identity);
            }
        }
    }

    #[test]
    fn test_unwrap_idempotent() {
        for raw in 0..=u16::MAX {
            let identity = unwrap(raw);
            match encode_identity(identity) {
                Ok(packed) => assert_eq!(unwrap(packed), identity, "raw {:#06x}", raw),
                Err(e) => {
                    assert_eq!(identity, KeyIdentity::hid(HidKeyCode::ErrorRollover));
                    assert_eq!(e, EncodeError::Unsupported);
                }
            }
        }
    }

    #[test]
    fn test_layer_range() {
        assert_eq!(
            encode(KeyAction::TapHold(Action::Key(HidKeyCode::A.into()), Action::LayerOn(16))),
            Err(EncodeError::LayerOutOfRange(16))
        );
        assert_eq!(encode(KeyAction::Single(Action::DefaultLayer(31))), Ok(0x525F));
        assert_eq!(
            encode(KeyAction::Single(Action::DefaultLayer(32))),
            Err(EncodeError::LayerOutOfRange(32))
        );
    }

    #[test]
    fn test_non_typing_keys_keep_raw_value() {
        assert_eq!(unwrap(0x5241).key, KeyCode::Other(0x5241));
        assert_eq!(unwrap(0x0200).key, KeyCode::Other(0x0200));
        assert!(unwrap(0x0000).is_none());
        assert!(unwrap(0x0001).is_none());
    }
}
