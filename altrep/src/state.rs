use crate::keycode::KeyIdentity;
use crate::modifier::ModifierCombination;
use crate::profile::Profile;

/// A key remembered for repeating, with the modifiers held when it was typed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RememberedKey {
    pub key: KeyIdentity,
    pub modifiers: ModifierCombination,
}

impl RememberedKey {
    pub const fn new(key: KeyIdentity, modifiers: ModifierCombination) -> Self {
        Self { key, modifiers }
    }
}

/// The last key typed, which the repeat keys act on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LastKeyState {
    last: Option<RememberedKey>,
}

impl LastKeyState {
    pub const fn new() -> Self {
        Self { last: None }
    }

    pub fn get(&self) -> Option<RememberedKey> {
        self.last
    }

    pub fn remember(&mut self, key: KeyIdentity, modifiers: ModifierCombination) {
        self.last = Some(RememberedKey::new(key, modifiers));
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

/// The previous key seen by training mode, kept apart from [`LastKeyState`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrainingState {
    prev: Option<KeyIdentity>,
}

impl TrainingState {
    pub const fn new() -> Self {
        Self { prev: None }
    }

    pub fn prev(&self) -> Option<KeyIdentity> {
        self.prev
    }

    pub fn update(&mut self, key: KeyIdentity) {
        self.prev = Some(key);
    }

    pub fn clear(&mut self) {
        self.prev = None;
    }
}

/// State machine of one press/release cycle of a tap-hold magic key
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagicKeyPhase {
    /// No tap-hold magic key is down
    #[default]
    Idle,
    /// Pressed, waiting for the host's tap/hold decision
    Observing,
    /// Released as a tap and the repeat ran. Kept until the next event.
    TapConfirmed,
    /// Released as a hold, the hold action already ran. Kept until the next event.
    HoldConfirmed,
}

/// All mutable state of the engine. Resets to the default profile on boot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagicState {
    pub active_profile: Profile,
    pub last_key: LastKeyState,
    pub training: TrainingState,
    pub phase: MagicKeyPhase,
    /// A plain repeat key press went to the host, so its release goes there too
    pub repeat_passthrough: bool,
}

impl MagicState {
    pub const fn new(default_profile: Profile) -> Self {
        Self {
            active_profile: default_profile,
            last_key: LastKeyState::new(),
            training: TrainingState::new(),
            phase: MagicKeyPhase::Idle,
            repeat_passthrough: false,
        }
    }

    /// Back to the boot state
    pub fn reset(&mut self, default_profile: Profile) {
        *self = Self::new(default_profile);
    }
}
