//! # Alternate-repeat types
//!
//! Fundamental type definitions shared by the alternate-repeat engine and its
//! configuration loader.
//!
//! ## Modules
//!
//! - [`action`] - Key actions as they are stored in a keymap (single key, tap-hold)
//! - [`keycode`] - HID keycodes, special repeat keys and [`keycode::KeyIdentity`]
//! - [`modifier`] - Modifier key combinations
//! - [`profile`] - Selectable base layouts

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
pub mod profile;
