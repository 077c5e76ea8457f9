//! # altrep
//!
//! An alternate-repeat engine for keyboard firmware. A single "magic key"
//! produces a context-sensitive output derived from the previously typed key
//! and the active base layout (profile): a substituted key, a short text
//! expansion, or a plain repeat.
//!
//! The engine is hardware independent. Firmware feeds raw 16-bit keycodes into
//! [`controller::RepeatKeyController::process_key`] and implements
//! [`controller::HostKeyboard`] to send the resulting keystrokes.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod behavior;
pub mod combo;
pub mod config;
pub mod controller;
pub mod encoding;
pub mod keymaps;
pub mod layout_macro;
pub mod registry;
pub mod resolver;
pub mod state;

pub use altrep_types::{action, keycode, modifier, profile};
pub use config::MagicConfig;
pub use controller::{HostKeyboard, KeyDisposition, KeyEvent, RepeatKeyController, SharedController, TapRecord};
pub use registry::{LayoutRegistry, Outcome, ProfileLayout, ProfileRuleProvider, SubstitutionRule};
