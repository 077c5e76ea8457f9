use crate::keycode::{HidKeyCode, KeyIdentity};
use crate::modifier::ModifierCombination;
use crate::profile::Profile;

/// Config for the alternate-repeat engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagicConfig {
    /// Block keys which the magic key would have typed, and type `training_nudge` instead
    pub training_enabled: bool,
    /// Key typed in place of a blocked key
    pub training_nudge: KeyIdentity,
    /// Profile active after boot
    pub default_profile: Profile,
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MagicConfig {
    pub const fn new() -> Self {
        Self {
            training_enabled: false,
            // `#`
            training_nudge: KeyIdentity::hid(HidKeyCode::Kc3).with_modifiers(ModifierCombination::LSHIFT),
            default_profile: Profile::Night,
        }
    }

    pub const fn with_training(self, training_enabled: bool) -> Self {
        Self {
            training_enabled,
            ..self
        }
    }

    pub const fn with_nudge(self, training_nudge: KeyIdentity) -> Self {
        Self { training_nudge, ..self }
    }

    pub const fn with_default_profile(self, default_profile: Profile) -> Self {
        Self {
            default_profile,
            ..self
        }
    }
}
