//! Repeat-key event controller.
//!
//! The host firmware calls [`RepeatKeyController::process_key`] for every key
//! press and release, after resolving tap-hold keys. The controller keeps the
//! last typed key, runs the repeat and alternate-repeat keys, follows
//! profile switches and optionally runs training mode.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::action::{Action, KeyAction};
use crate::config::MagicConfig;
use crate::encoding::{decode, unwrap};
use crate::keycode::{KeyCode, KeyIdentity, SpecialKey};
use crate::modifier::ModifierCombination;
use crate::profile::Profile;
use crate::registry::{Outcome, ProfileRuleProvider};
use crate::resolver::{matches_trigger, resolve};
use crate::state::{MagicKeyPhase, MagicState, RememberedKey};

/// The host's tap-hold classification of a key event
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapRecord {
    /// Number of consecutive taps, 0 when the key was held
    pub count: u8,
    /// Another key was pressed while this one was down
    pub interrupted: bool,
}

impl TapRecord {
    pub const fn tap() -> Self {
        Self {
            count: 1,
            interrupted: false,
        }
    }

    pub const fn hold() -> Self {
        Self {
            count: 0,
            interrupted: false,
        }
    }

    pub const fn interrupted() -> Self {
        Self {
            count: 1,
            interrupted: true,
        }
    }

    /// A genuine tap: counted and not interrupted
    pub fn is_tap(&self) -> bool {
        self.count > 0 && !self.interrupted
    }
}

/// A key event delivered by the host
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Raw 16-bit keycode, see [`crate::encoding`]
    pub keycode: u16,
    pub pressed: bool,
    /// Meaningful for tap-hold keys only
    pub tap: TapRecord,
}

impl KeyEvent {
    /// Press of a plain key
    pub const fn press(keycode: u16) -> Self {
        Self {
            keycode,
            pressed: true,
            tap: TapRecord::tap(),
        }
    }

    /// Release of a plain key
    pub const fn release(keycode: u16) -> Self {
        Self {
            keycode,
            pressed: false,
            tap: TapRecord::tap(),
        }
    }

    pub const fn with_tap(self, tap: TapRecord) -> Self {
        Self { tap, ..self }
    }
}

/// What the host should do with the event after the controller has seen it
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyDisposition {
    /// Process the key as usual
    Continue,
    /// The controller handled the key, skip the default processing
    Consumed,
}

/// What the controller needs from the host firmware
pub trait HostKeyboard {
    /// Modifiers currently held, including weak and one-shot modifiers
    fn active_modifiers(&self) -> ModifierCombination;

    /// Press and release `key`, with `modifiers` held in addition to the key's own
    fn tap_key(&mut self, key: KeyIdentity, modifiers: ModifierCombination);

    /// Type a string
    fn send_text(&mut self, text: &str);
}

/// Which repeat a repeat key performs
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum RepeatKind {
    Plain,
    Alternate,
}

impl RepeatKind {
    fn of(key: KeyIdentity) -> Option<Self> {
        match key.key {
            KeyCode::Special(SpecialKey::Repeat) => Some(RepeatKind::Plain),
            KeyCode::Special(SpecialKey::AltRepeat) => Some(RepeatKind::Alternate),
            _ => None,
        }
    }
}

/// The alternate-repeat engine, generic over where its rules come from
pub struct RepeatKeyController<P> {
    provider: P,
    config: MagicConfig,
    state: MagicState,
}

impl<P: ProfileRuleProvider> RepeatKeyController<P> {
    pub const fn new(provider: P, config: MagicConfig) -> Self {
        Self {
            provider,
            state: MagicState::new(config.default_profile),
            config,
        }
    }

    pub fn active_profile(&self) -> Profile {
        self.state.active_profile
    }

    /// The key the repeat keys currently act on
    pub fn last_key(&self) -> Option<RememberedKey> {
        self.state.last_key.get()
    }

    pub fn state(&self) -> &MagicState {
        &self.state
    }

    pub fn config(&self) -> &MagicConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Turn training mode on or off at runtime
    pub fn set_training(&mut self, enabled: bool) {
        info!("Magic training {}", if enabled { "on" } else { "off" });
        self.config.training_enabled = enabled;
        if !enabled {
            self.state.training.clear();
        }
    }

    /// Back to the boot state: default profile, no history
    pub fn reset(&mut self) {
        self.state.reset(self.config.default_profile);
    }

    /// Whether pressing `keycode` may replace the remembered key.
    ///
    /// Repeat keys (and tap-hold keys tapping them), modifiers, layer keys,
    /// no-op and transparent keys are never remembered.
    pub fn is_repeat_eligible(keycode: u16) -> bool {
        let tap_action = match decode(keycode) {
            KeyAction::No | KeyAction::Transparent => return false,
            KeyAction::Single(action) | KeyAction::TapHold(action, _) => action,
        };
        match tap_action {
            Action::Modifier(_) | Action::LayerOn(_) | Action::DefaultLayer(_) => false,
            _ => {
                let key = unwrap(keycode);
                !(key.is_none() || key.is_repeat_key() || key.is_modifier())
            }
        }
    }

    /// Process one key event. Returns whether the host should continue with
    /// its default handling of the key.
    pub fn process_key<H: HostKeyboard>(&mut self, event: KeyEvent, host: &mut H) -> KeyDisposition {
        let action = decode(event.keycode);

        // A confirmed tap or hold ends with the next event
        if matches!(
            self.state.phase,
            MagicKeyPhase::TapConfirmed | MagicKeyPhase::HoldConfirmed
        ) {
            self.state.phase = MagicKeyPhase::Idle;
        }

        // Profile switches take effect on press, before any later key is resolved
        if let KeyAction::Single(Action::DefaultLayer(layer)) = action {
            if event.pressed {
                self.switch_profile(layer);
            }
            return KeyDisposition::Continue;
        }

        let key = unwrap(event.keycode);
        let repeat = RepeatKind::of(key);

        if event.pressed && repeat.is_none() && self.check_training(event, key, host) == KeyDisposition::Consumed {
            return KeyDisposition::Consumed;
        }

        match (repeat, action) {
            (Some(kind), KeyAction::TapHold(_, _)) => self.process_repeat_tap_hold(kind, event, host),
            (Some(kind), _) => {
                if event.pressed {
                    let disposition = self.perform_repeat(kind, host);
                    self.state.repeat_passthrough = disposition == KeyDisposition::Continue;
                    disposition
                } else if core::mem::take(&mut self.state.repeat_passthrough) {
                    KeyDisposition::Continue
                } else {
                    KeyDisposition::Consumed
                }
            }
            (None, _) => {
                if event.pressed {
                    self.remember(event, key, host);
                }
                KeyDisposition::Continue
            }
        }
    }

    fn switch_profile(&mut self, layer: u8) {
        match self.provider.profile_for_layer(layer) {
            Some(profile) => {
                info!("Switch profile {:?} -> {:?}", self.state.active_profile, profile);
                self.state.active_profile = profile;
            }
            None => error!("No profile on default layer {}, keeping {:?}", layer, self.state.active_profile),
        }
    }

    fn remember<H: HostKeyboard>(&mut self, event: KeyEvent, key: KeyIdentity, host: &H) {
        if !Self::is_repeat_eligible(event.keycode) {
            debug!("Remember skip {:#x}", event.keycode);
            return;
        }
        if decode(event.keycode).is_tap_hold() && !event.tap.is_tap() {
            debug!("Remember skip hold {:#x}", event.keycode);
            return;
        }
        let modifiers = host.active_modifiers();
        debug!("Remember {:?}, mods {:?}", key, modifiers);
        self.state.last_key.remember(key, modifiers);
    }

    /// Training mode: block `key` when the magic key would have typed it after the previous key
    fn check_training<H: HostKeyboard>(&mut self, event: KeyEvent, key: KeyIdentity, host: &mut H) -> KeyDisposition {
        if !self.config.training_enabled || !Self::is_repeat_eligible(event.keycode) {
            return KeyDisposition::Continue;
        }
        if decode(event.keycode).is_tap_hold() && !event.tap.is_tap() {
            return KeyDisposition::Continue;
        }
        if !self.provider.supports(self.state.active_profile) {
            return KeyDisposition::Continue;
        }

        let blocked = match self.state.training.prev() {
            Some(prev) => {
                let outcome = resolve(
                    &self.provider,
                    prev,
                    host.active_modifiers(),
                    self.state.active_profile,
                );
                debug!("Training check prev {:?}, outcome {:?}, key {:?}", prev, outcome, key);
                matches_trigger(&outcome, key)
            }
            None => false,
        };
        self.state.training.update(key);

        if blocked {
            debug!("Training block {:?}", key);
            // Still the last typed key for the repeat keys
            self.remember(event, key, host);
            host.tap_key(self.config.training_nudge, ModifierCombination::new());
            KeyDisposition::Consumed
        } else {
            KeyDisposition::Continue
        }
    }

    /// A tap-hold key tapping a repeat key acts on release, and only when it was tapped
    fn process_repeat_tap_hold<H: HostKeyboard>(
        &mut self,
        kind: RepeatKind,
        event: KeyEvent,
        host: &mut H,
    ) -> KeyDisposition {
        if event.pressed {
            debug!("Magic tap-hold press {:#x}, {:?}", event.keycode, event.tap);
            self.state.phase = MagicKeyPhase::Observing;
            return KeyDisposition::Continue;
        }

        if event.tap.is_tap() {
            debug!("Magic tap-hold tapped {:#x}", event.keycode);
            self.state.phase = MagicKeyPhase::TapConfirmed;
            self.perform_repeat(kind, host)
        } else {
            debug!("Magic tap-hold held {:#x}, {:?}", event.keycode, event.tap);
            self.state.phase = MagicKeyPhase::HoldConfirmed;
            KeyDisposition::Continue
        }
    }

    fn perform_repeat<H: HostKeyboard>(&mut self, kind: RepeatKind, host: &mut H) -> KeyDisposition {
        let profile = self.state.active_profile;
        if kind == RepeatKind::Alternate && !self.provider.supports(profile) {
            error!("Active profile {:?} has no rules", profile);
            return KeyDisposition::Continue;
        }
        let Some(last) = self.state.last_key.get() else {
            debug!("Repeat with nothing remembered");
            return KeyDisposition::Consumed;
        };

        let outcome = match kind {
            RepeatKind::Plain => Outcome::FallbackRepeat,
            RepeatKind::Alternate => resolve(&self.provider, last.key, last.modifiers, profile),
        };
        match outcome {
            Outcome::EmitText(text) => {
                debug!("Magic text {}", text);
                host.send_text(text);
            }
            Outcome::EmitKey(alt) => {
                let modifiers = host.active_modifiers();
                debug!("Magic key {:?}, mods {:?}", alt, modifiers);
                host.tap_key(alt, modifiers);
            }
            Outcome::FallbackRepeat => {
                debug!("Repeat {:?}, mods {:?}", last.key, last.modifiers);
                host.tap_key(last.key, last.modifiers);
            }
        }
        KeyDisposition::Consumed
    }
}

/// A [`RepeatKeyController`] that can live in a `static` and be reached from
/// host callbacks without context
pub struct SharedController<P> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<RepeatKeyController<P>>>,
}

impl<P: ProfileRuleProvider> SharedController<P> {
    pub const fn new(controller: RepeatKeyController<P>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    pub fn process_key<H: HostKeyboard>(&self, event: KeyEvent, host: &mut H) -> KeyDisposition {
        self.inner.lock(|c| c.borrow_mut().process_key(event, host))
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut RepeatKeyController<P>) -> R) -> R {
        self.inner.lock(|c| f(&mut c.borrow_mut()))
    }
}
