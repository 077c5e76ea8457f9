//! Alternate-repeat resolution.

use crate::keycode::KeyIdentity;
use crate::modifier::ModifierCombination;
use crate::profile::Profile;
use crate::registry::{Outcome, ProfileRuleProvider};

/// What the alternate-repeat key should produce after `last` was typed with
/// `last_modifiers` held, under `profile`.
///
/// Rules match the key identity exactly, held modifiers don't change the
/// match. Asking about a profile the provider doesn't know is a programming
/// error: it's logged and answered with [`Outcome::FallbackRepeat`].
pub fn resolve<P: ProfileRuleProvider + ?Sized>(
    provider: &P,
    last: KeyIdentity,
    last_modifiers: ModifierCombination,
    profile: Profile,
) -> Outcome<'_> {
    if !provider.supports(profile) {
        error!("Resolving alternate repeat with unsupported profile {:?}", profile);
        return Outcome::FallbackRepeat;
    }
    let outcome = provider.lookup(profile, last);
    debug!(
        "Alternate repeat of {:?} (held {:?}) under {:?}: {:?}",
        last, last_modifiers, profile, outcome
    );
    outcome
}

/// The key which, typed directly, produces the same thing the outcome would.
///
/// For a text expansion that's the key of its first character, skipped when
/// the text starts with a space. A plain repeat has no trigger.
pub fn training_trigger(outcome: &Outcome<'_>) -> Option<KeyIdentity> {
    match outcome {
        Outcome::EmitKey(key) => Some(*key),
        Outcome::EmitText(text) => match text.as_bytes().first() {
            Some(b' ') | None => None,
            Some(&c) => {
                let trigger = KeyIdentity::from_ascii(c);
                (!trigger.is_none()).then_some(trigger)
            }
        },
        Outcome::FallbackRepeat => None,
    }
}

/// Returns `true` when typing `key` would produce what the outcome produces
pub fn matches_trigger(outcome: &Outcome<'_>, key: KeyIdentity) -> bool {
    match training_trigger(outcome) {
        Some(trigger) => trigger == key,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::HidKeyCode;
    use crate::modifier::SHIFT;
    use crate::registry::{LayoutRegistry, ProfileLayout, SubstitutionRule};
    use crate::rule;

    static NIGHT: [SubstitutionRule; 3] = [rule!(Space => "the"), rule!(Comma => " but"), rule!(Minus => Shift + Dot)];
    static GALLIUM: [SubstitutionRule; 1] = [rule!(Dot => Slash)];
    static PROFILES: [ProfileLayout; 2] = [
        ProfileLayout::new(Profile::Night, 0, &NIGHT),
        ProfileLayout::new(Profile::Gallium, 1, &GALLIUM),
    ];
    static REGISTRY: LayoutRegistry = LayoutRegistry::new(&PROFILES, 1);

    #[test]
    fn test_resolve_rule() {
        let space = KeyIdentity::hid(HidKeyCode::Space);
        assert_eq!(
            resolve(&REGISTRY, space, ModifierCombination::new(), Profile::Night),
            Outcome::EmitText("the")
        );
        // Held modifiers don't affect matching
        assert_eq!(resolve(&REGISTRY, space, SHIFT, Profile::Night), Outcome::EmitText("the"));
        // Same key, other profile
        assert_eq!(
            resolve(&REGISTRY, space, ModifierCombination::new(), Profile::Gallium),
            Outcome::FallbackRepeat
        );
    }

    #[test]
    fn test_resolve_unsupported_profile() {
        let dot = KeyIdentity::hid(HidKeyCode::Dot);
        assert_eq!(
            resolve(&REGISTRY, dot, ModifierCombination::new(), Profile::Bunya),
            Outcome::FallbackRepeat
        );
    }

    #[test]
    fn test_training_trigger() {
        assert_eq!(
            training_trigger(&Outcome::EmitText("the")),
            Some(KeyIdentity::hid(HidKeyCode::T))
        );
        assert_eq!(training_trigger(&Outcome::EmitText(" but")), None);
        assert_eq!(training_trigger(&Outcome::EmitText("")), None);
        assert_eq!(training_trigger(&Outcome::FallbackRepeat), None);
        let gt = KeyIdentity::hid(HidKeyCode::Dot).with_modifiers(ModifierCombination::LSHIFT);
        assert_eq!(training_trigger(&Outcome::EmitKey(gt)), Some(gt));
        assert!(matches_trigger(&Outcome::EmitKey(gt), gt));
        assert!(!matches_trigger(&Outcome::EmitKey(gt), KeyIdentity::hid(HidKeyCode::Dot)));
    }
}
