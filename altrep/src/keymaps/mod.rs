//! Boards shipping alternate-repeat rules.
//!
//! The rules of a profile are the same on every board unless a board says
//! otherwise, so the shared tables live here.

use crate::registry::SubstitutionRule;
use crate::rule;

pub mod boaty;
pub mod lily58;
pub mod skeletyl;

// Default layer indices, shared by all boards
pub const BASE_NIGHT: u8 = 0;
pub const BASE_GALLIUM: u8 = 1;
/// Dusk on the lily58, Bunya on the boaty and the skeletyl
pub const BASE_THIRD: u8 = 2;
pub const BASE_RACKET: u8 = 3;
pub const FUN: u8 = 4;
pub const NUM_NIGHT: u8 = 5;
pub const SYM_NIGHT: u8 = 6;
pub const NAV_NIGHT: u8 = 7;
pub const MEDIA_NIGHT: u8 = 8;

/// Bootloader keycode sent by the dfu combos
pub const QK_BOOT: u16 = 0x7C00;
/// User macro typing the github url, expanded by the host
pub const MACRO_GITHUB_URL: u16 = 0x7E40;

pub static NIGHT_RULES: [SubstitutionRule; 20] = [
    rule!(Space => "the"),
    rule!(Comma => " but"),
    rule!(Minus => Shift + Dot),
    rule!(Dot => Slash),
    rule!(A => O),
    rule!(B => "efore"),
    rule!(C => Y),
    rule!(G => Y),
    rule!(H => L),
    rule!(I => "on"),
    rule!(J => "ust"),
    rule!(M => "ent"),
    rule!(N => "ion"),
    rule!(P => Y),
    rule!(Q => "ue"),
    rule!(T => "ion"),
    rule!(U => E),
    rule!(V => S),
    rule!(W => "hich"),
    rule!(Y => Quote),
];

pub static GALLIUM_RULES: [SubstitutionRule; 13] = [
    rule!(Dot => Slash),
    rule!(A => Y),
    rule!(B => R),
    rule!(C => S),
    rule!(E => Y),
    rule!(G => S),
    rule!(M => B),
    rule!(O => K),
    rule!(P => H),
    rule!(R => L),
    rule!(S => C),
    rule!(U => E),
    rule!(Y => E),
];
