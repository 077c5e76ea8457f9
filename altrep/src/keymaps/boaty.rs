//! Jels Boaty: Night, Gallium, Bunya and Racket. Rules only, the base layers stay in the host keymap.

use super::{BASE_GALLIUM, BASE_NIGHT, BASE_RACKET, BASE_THIRD, GALLIUM_RULES, NIGHT_RULES};
use crate::profile::Profile;
use crate::registry::{LayoutRegistry, ProfileLayout, SubstitutionRule};
use crate::rule;

pub static BUNYA_RULES: [SubstitutionRule; 4] = [
    rule!(Space => "the"),
    rule!(Comma => " but"),
    rule!(Dot => Slash),
    rule!(Slash => Shift + Dot),
];

pub static RACKET_RULES: [SubstitutionRule; 1] = [rule!(Dot => Slash)];

static PROFILES: [ProfileLayout; 4] = [
    ProfileLayout::new(Profile::Night, BASE_NIGHT, &NIGHT_RULES),
    ProfileLayout::new(Profile::Gallium, BASE_GALLIUM, &GALLIUM_RULES),
    ProfileLayout::new(Profile::Bunya, BASE_THIRD, &BUNYA_RULES),
    ProfileLayout::new(Profile::Racket, BASE_RACKET, &RACKET_RULES),
];

pub static REGISTRY: LayoutRegistry = LayoutRegistry::new(&PROFILES, 12);
