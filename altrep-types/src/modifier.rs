use core::ops::BitOr;

use bitfield_struct::bitfield;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
///
/// The low five bits are exactly the modifier payload of a packed 16-bit keycode.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq, Hash)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    pub const LCTRL: Self = Self::new_from(false, false, false, false, true);
    pub const LSHIFT: Self = Self::new_from(false, false, false, true, false);
    pub const LALT: Self = Self::new_from(false, false, true, false, false);
    pub const LGUI: Self = Self::new_from(false, true, false, false, false);
    pub const RCTRL: Self = Self::new_from(true, false, false, false, true);
    pub const RSHIFT: Self = Self::new_from(true, false, false, true, false);
    pub const RALT: Self = Self::new_from(true, false, true, false, false);
    pub const RGUI: Self = Self::new_from(true, true, false, false, false);

    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// Returns `true` when no modifier is set. The side bit alone doesn't count.
    pub const fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }

    /// The 5-bit modifier payload used by packed keycodes
    pub const fn to_payload(self) -> u8 {
        self.into_bits() & 0x1F
    }

    /// Build from a 5-bit modifier payload, extra bits are ignored
    pub const fn from_payload(payload: u8) -> Self {
        Self::from_bits(payload & 0x1F)
    }
}
