//! Bastard Keyboards Skeletyl: Night, Gallium, Bunya and Racket on a 3x5+3 split.
//!
//! Shares the Bunya and Racket rules with the boaty.

use super::boaty::{BUNYA_RULES, RACKET_RULES};
use super::{BASE_GALLIUM, BASE_NIGHT, BASE_RACKET, BASE_THIRD, GALLIUM_RULES, MACRO_GITHUB_URL, NIGHT_RULES, QK_BOOT};
use crate::action::KeyAction;
use crate::combo::Combo;
use crate::keycode::HidKeyCode;
use crate::modifier::ModifierCombination;
use crate::profile::Profile;
use crate::registry::{LayoutRegistry, ProfileLayout};
use crate::{a, k, lt, lt_arep, mt, mt_arep};

pub const ROW: usize = 4;
pub const COL: usize = 10;

// Each row is the left half then the right half. Thumbs sit in the middle six columns.

#[rustfmt::skip]
static NIGHT_KEYS: [KeyAction; ROW * COL] = [
    k!(B), k!(F), k!(L), k!(K), k!(Q), k!(P), k!(G), k!(O), k!(U), k!(Dot),
    mt!(N, ModifierCombination::LGUI), mt!(S, ModifierCombination::LALT), mt!(H, ModifierCombination::LCTRL), mt!(T, ModifierCombination::LSHIFT), k!(M), k!(Y), mt!(C, ModifierCombination::LSHIFT), mt!(A, ModifierCombination::LCTRL), mt!(E, ModifierCombination::LALT), mt!(I, ModifierCombination::LGUI),
    k!(X), k!(V), k!(J), k!(D), k!(Z), k!(Quote), k!(W), k!(Minus), k!(Semicolon), k!(Comma),
    a!(No), a!(No), lt!(5, Backspace), lt!(6, R), mt_arep!(ModifierCombination::LSHIFT), mt!(Tab, ModifierCombination::LSHIFT), lt!(7, Space), lt!(8, Enter), a!(No), a!(No),
];

#[rustfmt::skip]
static GALLIUM_KEYS: [KeyAction; ROW * COL] = [
    k!(B), k!(L), k!(D), k!(C), k!(V), k!(J), k!(Y), k!(O), k!(U), k!(Dot),
    mt!(N, ModifierCombination::LGUI), mt!(R, ModifierCombination::LALT), mt!(T, ModifierCombination::LCTRL), mt!(S, ModifierCombination::LSHIFT), k!(G), k!(P), mt!(H, ModifierCombination::LSHIFT), mt!(A, ModifierCombination::LCTRL), mt!(E, ModifierCombination::LALT), mt!(I, ModifierCombination::LGUI),
    k!(X), k!(Q), k!(M), k!(W), k!(Z), k!(K), k!(F), k!(Quote), k!(Minus), k!(Comma),
    a!(No), a!(No), lt!(5, Backspace), lt_arep!(6), mt!(Delete, ModifierCombination::LSHIFT), mt!(Tab, ModifierCombination::LSHIFT), lt!(7, Space), lt!(8, Enter), a!(No), a!(No),
];

#[rustfmt::skip]
static BUNYA_KEYS: [KeyAction; ROW * COL] = [
    k!(B), k!(L), k!(M), k!(C), k!(Z), k!(J), k!(F), k!(O), k!(U), k!(Comma),
    mt!(N, ModifierCombination::LGUI), mt!(R, ModifierCombination::LALT), mt!(T, ModifierCombination::LCTRL), mt!(D, ModifierCombination::LSHIFT), k!(P), k!(Y), mt!(H, ModifierCombination::LSHIFT), mt!(A, ModifierCombination::LCTRL), mt!(E, ModifierCombination::LALT), mt!(I, ModifierCombination::LGUI),
    k!(X), k!(Q), k!(V), k!(G), k!(W), k!(Semicolon), k!(K), k!(Quote), k!(Minus), k!(Dot),
    a!(No), a!(No), lt!(5, Backspace), lt!(6, S), mt_arep!(ModifierCombination::LSHIFT), mt!(Tab, ModifierCombination::LSHIFT), lt!(7, Space), lt!(8, Enter), a!(No), a!(No),
];

#[rustfmt::skip]
static RACKET_KEYS: [KeyAction; ROW * COL] = [
    k!(F), k!(D), k!(L), k!(W), k!(J), k!(Minus), k!(B), k!(O), k!(U), k!(Comma),
    mt!(S, ModifierCombination::LGUI), mt!(T, ModifierCombination::LALT), mt!(H, ModifierCombination::LCTRL), mt!(C, ModifierCombination::LSHIFT), k!(Y), k!(Q), mt!(N, ModifierCombination::LSHIFT), mt!(A, ModifierCombination::LCTRL), mt!(E, ModifierCombination::LALT), mt!(I, ModifierCombination::LGUI),
    k!(X), k!(K), k!(M), k!(G), k!(V), k!(Z), k!(P), k!(Quote), k!(Slash), k!(Dot),
    a!(No), a!(No), lt!(5, Backspace), lt!(6, R), mt_arep!(ModifierCombination::LSHIFT), mt!(Tab, ModifierCombination::LSHIFT), lt!(7, Space), lt!(8, Enter), a!(No), a!(No),
];

static PROFILES: [ProfileLayout; 4] = [
    ProfileLayout::new(Profile::Night, BASE_NIGHT, &NIGHT_RULES).with_keys(&NIGHT_KEYS),
    ProfileLayout::new(Profile::Gallium, BASE_GALLIUM, &GALLIUM_RULES).with_keys(&GALLIUM_KEYS),
    ProfileLayout::new(Profile::Bunya, BASE_THIRD, &BUNYA_RULES).with_keys(&BUNYA_KEYS),
    ProfileLayout::new(Profile::Racket, BASE_RACKET, &RACKET_RULES).with_keys(&RACKET_KEYS),
];

pub static REGISTRY: LayoutRegistry = LayoutRegistry::new(&PROFILES, COL);

const BASE_PROFILES: &[Profile] = &[Profile::Night, Profile::Gallium, Profile::Bunya, Profile::Racket];

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
