use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// A named base layout. Each profile carries its own alternate-repeat rules.
#[repr(u8)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, FromRepr, IntoStaticStr,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Profile {
    Night = 0,
    Gallium = 1,
    Dusk = 2,
    Racket = 3,
    Bunya = 4,
}

impl Profile {
    /// Lowercase name, as used in config files
    pub fn name(self) -> &'static str {
        self.into()
    }
}
