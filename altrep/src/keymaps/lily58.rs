//! Lily58 rev1: Night, Gallium, Dusk and Racket with full base layers.

use super::{
    BASE_GALLIUM, BASE_NIGHT, BASE_RACKET, BASE_THIRD, GALLIUM_RULES, MACRO_GITHUB_URL, NIGHT_RULES, QK_BOOT,
};
use crate::action::KeyAction;
use crate::combo::Combo;
use crate::keycode::HidKeyCode;
use crate::modifier::ModifierCombination;
use crate::profile::Profile;
use crate::registry::{LayoutRegistry, ProfileLayout, SubstitutionRule};
use crate::{a, k, lt, lt_arep, mt, mt_arep, rule};

pub const ROW: usize = 5;
pub const COL: usize = 14;

pub static DUSK_RULES: [SubstitutionRule; 3] = [rule!(Space => "the"), rule!(Comma => " but"), rule!(Dot => Slash)];

pub static RACKET_RULES: [SubstitutionRule; 4] = [
    rule!(Dot => Slash),
    rule!(Space => "the"),
    rule!(Comma => " but"),
    rule!(Minus => Shift + Dot),
];

// Rows of the split halves are laid out left to right and padded to `COL`

#[rustfmt::skip]
static NIGHT_KEYS: [KeyAction; ROW * COL] = [
    a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No),
    a!(No), k!(B), k!(F), k!(L), k!(K), k!(Q), k!(Y), mt!(C, ModifierCombination::LSHIFT), mt!(A, ModifierCombination::LCTRL), mt!(E, ModifierCombination::LALT), mt!(I, ModifierCombination::LGUI), a!(No), a!(No), a!(No),
    k!(P), k!(G), k!(O), k!(U), k!(Dot), a!(No), a!(No), k!(X), k!(V), k!(J), k!(D), k!(Z), a!(No), a!(No),
    k!(Y), mt!(N, ModifierCombination::LGUI), mt!(S, ModifierCombination::LALT), mt!(H, ModifierCombination::LCTRL), mt!(T, ModifierCombination::LSHIFT), k!(M), a!(No), a!(No), k!(Quote), k!(W), k!(Minus), k!(Semicolon), k!(Comma), a!(No),
    a!(No), lt!(5, Backspace), lt!(6, R), mt_arep!(ModifierCombination::LSHIFT), mt!(Tab, ModifierCombination::LSHIFT), lt!(7, Space), lt!(8, Enter), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No),
];

#[rustfmt::skip]
static GALLIUM_KEYS: [KeyAction; ROW * COL] = [
    a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No),
    a!(No), k!(B), k!(L), k!(D), k!(C), k!(V), k!(P), mt!(H, ModifierCombination::LSHIFT), mt!(A, ModifierCombination::LCTRL), mt!(E, ModifierCombination::LALT), mt!(I, ModifierCombination::LGUI), k!(Enter), a!(No), a!(No),
    k!(J), k!(Y), k!(O), k!(U), k!(Dot), a!(No), a!(No), k!(X), k!(Q), k!(M), k!(W), k!(Z), a!(No), a!(No),
    a!(No), mt!(N, ModifierCombination::LGUI), mt!(R, ModifierCombination::LALT), mt!(T, ModifierCombination::LCTRL), mt!(S, ModifierCombination::LSHIFT), k!(G), a!(No), a!(No), k!(K), k!(F), k!(Quote), k!(Minus), k!(Comma), a!(No),
    a!(No), lt!(5, Backspace), lt_arep!(6), mt!(Delete, ModifierCombination::LSHIFT), mt!(Tab, ModifierCombination::LSHIFT), lt!(7, Space), lt!(8, Enter), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No),
];

#[rustfmt::skip]
static DUSK_KEYS: [KeyAction; ROW * COL] = [
    a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No),
    a!(No), k!(B), k!(F), k!(D), k!(W), k!(P), k!(M), mt!(H, ModifierCombination::LSHIFT), mt!(A, ModifierCombination::LCTRL), mt!(E, ModifierCombination::LALT), mt!(I, ModifierCombination::LGUI), a!(No), a!(No), a!(No),
    k!(J), k!(Quote), k!(O), k!(U), k!(Comma), a!(No), a!(No), k!(X), k!(V), k!(K), k!(G), k!(Q), a!(No), a!(No),
    a!(No), mt!(N, ModifierCombination::LGUI), mt!(S, ModifierCombination::LALT), mt!(T, ModifierCombination::LCTRL), mt!(C, ModifierCombination::LSHIFT), k!(Y), a!(No), a!(No), k!(Z), k!(L), k!(Minus), k!(Slash), k!(Dot), a!(No),
    a!(No), lt!(5, Backspace), lt!(6, R), mt_arep!(ModifierCombination::LSHIFT), mt!(Tab, ModifierCombination::LSHIFT), lt!(7, Space), lt!(8, Enter), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No),
];

#[rustfmt::skip]
static RACKET_KEYS: [KeyAction; ROW * COL] = [
    a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No),
    a!(No), k!(F), k!(D), k!(L), k!(W), k!(J), k!(Q), mt!(N, ModifierCombination::LSHIFT), mt!(A, ModifierCombination::LCTRL), mt!(E, ModifierCombination::LALT), mt!(I, ModifierCombination::LGUI), a!(No), a!(No), a!(No),
    k!(Minus), k!(B), k!(O), k!(U), k!(Comma), a!(No), a!(No), k!(X), k!(K), k!(M), k!(G), k!(V), a!(No), a!(No),
    a!(No), mt!(S, ModifierCombination::LGUI), mt!(T, ModifierCombination::LALT), mt!(H, ModifierCombination::LCTRL), mt!(C, ModifierCombination::LSHIFT), k!(Y), a!(No), a!(No), k!(Z), k!(P), k!(Quote), k!(Slash), k!(Dot), a!(No),
    a!(No), lt!(5, Backspace), lt!(6, R), mt_arep!(ModifierCombination::LSHIFT), mt!(Tab, ModifierCombination::LSHIFT), lt!(7, Space), lt!(8, Enter), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No),
];

static PROFILES: [ProfileLayout; 4] = [
    ProfileLayout::new(Profile::Night, BASE_NIGHT, &NIGHT_RULES).with_keys(&NIGHT_KEYS),
    ProfileLayout::new(Profile::Gallium, BASE_GALLIUM, &GALLIUM_RULES).with_keys(&GALLIUM_KEYS),
    ProfileLayout::new(Profile::Dusk, BASE_THIRD, &DUSK_RULES).with_keys(&DUSK_KEYS),
    ProfileLayout::new(Profile::Racket, BASE_RACKET, &RACKET_RULES).with_keys(&RACKET_KEYS),
];

pub static REGISTRY: LayoutRegistry = LayoutRegistry::new(&PROFILES, COL);

const BASE_PROFILES: &[Profile] = &[Profile::Night, Profile::Gallium, Profile::Dusk, Profile::Racket];

pub static COMBOS: [Combo; 3] = [
    Combo::new(
        "dfu_left",
        &[HidKeyCode::B as u16, HidKeyCode::Q as u16, HidKeyCode::Z as u16],
        QK_BOOT,
        BASE_PROFILES,
    ),
    Combo::new(
        "dfu_right",
        &[HidKeyCode::P as u16, HidKeyCode::Dot as u16, HidKeyCode::Quote as u16],
        QK_BOOT,
        BASE_PROFILES,
    ),
    Combo::new(
        "github_url",
        &[HidKeyCode::G as u16, HidKeyCode::O as u16, HidKeyCode::U as u16, HidKeyCode::Dot as u16],
        MACRO_GITHUB_URL,
        BASE_PROFILES,
    ),
];
