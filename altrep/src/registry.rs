//! Layout registry: per-profile alternate-repeat rules and base layers.

use crate::action::KeyAction;
use crate::keycode::KeyIdentity;
use crate::profile::Profile;

/// What the alternate-repeat key produces for a remembered key
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome<'a> {
    /// Tap a single substitute key
    EmitKey(KeyIdentity),
    /// Type a short text expansion
    EmitText(&'a str),
    /// No rule, repeat the remembered key
    FallbackRepeat,
}

/// `trigger` typed last makes the alternate-repeat key produce `outcome`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubstitutionRule {
    pub trigger: KeyIdentity,
    pub outcome: Outcome<'static>,
}

impl SubstitutionRule {
    pub const fn new(trigger: KeyIdentity, outcome: Outcome<'static>) -> Self {
        Self { trigger, outcome }
    }
}

/// Everything a board defines for one profile
#[derive(Debug, Copy, Clone)]
pub struct ProfileLayout {
    pub profile: Profile,
    /// Default layer index which selects this profile
    pub layer: u8,
    pub rules: &'static [SubstitutionRule],
    /// Base layer keys, row-major. May be empty when the board only ships rules.
    pub keys: &'static [KeyAction],
}

impl ProfileLayout {
    pub const fn new(profile: Profile, layer: u8, rules: &'static [SubstitutionRule]) -> Self {
        Self {
            profile,
            layer,
            rules,
            keys: &[],
        }
    }

    pub const fn with_keys(self, keys: &'static [KeyAction]) -> Self {
        Self { keys, ..self }
    }

    /// First rule whose trigger is exactly `key`
    pub fn lookup(&self, key: KeyIdentity) -> Outcome<'static> {
        self.rules
            .iter()
            .find(|rule| rule.trigger == key)
            .map(|rule| rule.outcome)
            .unwrap_or(Outcome::FallbackRepeat)
    }
}

/// Supplies alternate-repeat rules to the resolver and controller.
///
/// Implemented by the static board tables in [`crate::keymaps`] and by rule
/// sets loaded at runtime.
pub trait ProfileRuleProvider {
    /// The outcome for `key` typed last under `profile`. Unknown keys give [`Outcome::FallbackRepeat`].
    fn lookup(&self, profile: Profile, key: KeyIdentity) -> Outcome<'_>;

    /// The profile selected by switching the default layer to `layer`
    fn profile_for_layer(&self, layer: u8) -> Option<Profile>;

    /// Whether this provider has rules for `profile` at all
    fn supports(&self, profile: Profile) -> bool;
}

impl<T: ProfileRuleProvider + ?Sized> ProfileRuleProvider for &T {
    fn lookup(&self, profile: Profile, key: KeyIdentity) -> Outcome<'_> {
        (**self).lookup(profile, key)
    }

    fn profile_for_layer(&self, layer: u8) -> Option<Profile> {
        (**self).profile_for_layer(layer)
    }

    fn supports(&self, profile: Profile) -> bool {
        (**self).supports(profile)
    }
}

/// Problems found by [`LayoutRegistry::validate`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    DuplicateProfile(Profile),
    DuplicateLayer(u8),
    DuplicateTrigger(Profile, KeyIdentity),
    /// The base layer isn't a whole number of rows
    RaggedLayer(Profile),
}

/// A board's static set of profiles
#[derive(Debug, Copy, Clone)]
pub struct LayoutRegistry {
    profiles: &'static [ProfileLayout],
    /// Columns per row of the base layers
    cols: usize,
}

impl LayoutRegistry {
    pub const fn new(profiles: &'static [ProfileLayout], cols: usize) -> Self {
        Self { profiles, cols }
    }

    pub fn profiles(&self) -> &'static [ProfileLayout] {
        self.profiles
    }

    pub fn layout(&self, profile: Profile) -> Option<&'static ProfileLayout> {
        self.profiles.iter().find(|p| p.profile == profile)
    }

    /// The base layer action at `(row, col)` of a profile
    pub fn key_at(&self, profile: Profile, row: usize, col: usize) -> KeyAction {
        if col >= self.cols {
            return KeyAction::No;
        }
        self.layout(profile)
            .and_then(|p| p.keys.get(row * self.cols + col))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    /// Check the tables for ambiguities
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (i, layout) in self.profiles.iter().enumerate() {
            for other in &self.profiles[..i] {
                if other.profile == layout.profile {
                    return Err(RegistryError::DuplicateProfile(layout.profile));
                }
                if other.layer == layout.layer {
                    return Err(RegistryError::DuplicateLayer(layout.layer));
                }
            }
            for (j, rule) in layout.rules.iter().enumerate() {
                if layout.rules[..j].iter().any(|r| r.trigger == rule.trigger) {
                    return Err(RegistryError::DuplicateTrigger(layout.profile, rule.trigger));
                }
            }
            if self.cols == 0 || layout.keys.len() % self.cols != 0 {
                return Err(RegistryError::RaggedLayer(layout.profile));
            }
        }
        Ok(())
    }
}

impl ProfileRuleProvider for LayoutRegistry {
    fn lookup(&self, profile: Profile, key: KeyIdentity) -> Outcome<'_> {
        match self.layout(profile) {
            Some(layout) => layout.lookup(key),
            None => Outcome::FallbackRepeat,
        }
    }

    fn profile_for_layer(&self, layer: u8) -> Option<Profile> {
        self.profiles.iter().find(|p| p.layer == layer).map(|p| p.profile)
    }

    fn supports(&self, profile: Profile) -> bool {
        self.layout(profile).is_some()
    }
}
