//! Profile gating of combos. Detection itself belongs to the host.

use heapless::Vec;

use crate::profile::Profile;

// Max number of combos
pub const COMBO_MAX_NUM: usize = 8;
// Max size of combos
pub const COMBO_MAX_LENGTH: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Combo {
    pub name: &'static str,
    /// Raw keycodes pressed together
    pub keys: &'static [u16],
    /// Raw keycode sent when the combo fires
    pub output: u16,
    /// Profiles the combo may fire under, empty means all
    pub profiles: &'static [Profile],
}

impl Combo {
    pub const fn new(name: &'static str, keys: &'static [u16], output: u16, profiles: &'static [Profile]) -> Self {
        Self {
            name,
            keys,
            output,
            profiles,
        }
    }

    pub fn active_in(&self, profile: Profile) -> bool {
        self.profiles.is_empty() || self.profiles.contains(&profile)
    }
}

/// Decides which combos may fire under the active profile
#[derive(Debug, Copy, Clone)]
pub struct ComboGate<'a> {
    combos: &'a [Combo],
}

impl<'a> ComboGate<'a> {
    pub const fn new(combos: &'a [Combo]) -> Self {
        Self { combos }
    }

    pub fn combos(&self) -> &'a [Combo] {
        self.combos
    }

    /// Whether combo `index` may fire. Unknown combos are never held back.
    pub fn combo_should_trigger(&self, index: usize, profile: Profile) -> bool {
        match self.combos.get(index) {
            Some(combo) => {
                let active = combo.active_in(profile);
                if !active {
                    debug!("Combo {} gated under {:?}", combo.name, profile);
                }
                active
            }
            None => true,
        }
    }

    /// Combos which may fire under `profile`
    pub fn active(&self, profile: Profile) -> Vec<&'a Combo, COMBO_MAX_NUM> {
        let mut active = Vec::new();
        for combo in self.combos.iter().filter(|c| c.active_in(profile)) {
            if active.push(combo).is_err() {
                warn!("Too many combos, ignoring {}", combo.name);
                break;
            }
        }
        active
    }
}
