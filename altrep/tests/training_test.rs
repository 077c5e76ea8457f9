pub mod common;

use altrep::config::MagicConfig;
use altrep::controller::{KeyDisposition, RepeatKeyController};
use altrep::keycode::HidKeyCode;
use altrep::keymaps::boaty;
use altrep::modifier::ModifierCombination;
use altrep::profile::Profile;
use altrep::{arep, shifted};

use crate::common::{
    Output, TestHost, create_lily58_controller, create_training_controller, key, lily58_key, nudge_output, press,
    press_held, raw, release, release_held, tap_output, text_output,
};

#[test]
fn test_training_blocks_expansion_start() {
    let space = lily58_key(Profile::Night, 4, 5);
    let t = lily58_key(Profile::Night, 3, 4);
    let mut controller = create_training_controller();
    let mut host = TestHost::default();

    assert_eq!(controller.process_key(press(space), &mut host), KeyDisposition::Continue);
    controller.process_key(release(space), &mut host);
    assert_eq!(controller.process_key(press(t), &mut host), KeyDisposition::Consumed);
    assert_eq!(host.outputs, vec![nudge_output()]);

    // The blocked key is still the last key
    assert_eq!(controller.last_key().map(|k| k.key), Some(key(HidKeyCode::T)));
    assert_eq!(controller.state().training.prev(), Some(key(HidKeyCode::T)));
}

#[test]
fn test_training_chain() {
    // "the" after space, "ion" after t
    let space = kc!(Space);
    let t = lily58_key(Profile::Night, 3, 4);
    let i = lily58_key(Profile::Night, 1, 10);
    magic_sequence_test! {
        controller: create_training_controller(),
        sequence: [press(space), release(space), press(t), release(t), press(i), release(i)],
        expected_outputs: [nudge_output(), nudge_output()]
    };
}

#[test]
fn test_training_lets_other_keys_through() {
    let mut controller = create_training_controller();
    let mut host = TestHost::default();
    for code in [kc!(Space), kc!(A), kc!(T), kc!(Comma), kc!(B)] {
        assert_eq!(controller.process_key(press(code), &mut host), KeyDisposition::Continue);
        controller.process_key(release(code), &mut host);
    }
    assert!(host.outputs.is_empty());
}

#[test]
fn test_training_off() {
    let t = lily58_key(Profile::Night, 3, 4);
    let mut controller = create_lily58_controller(MagicConfig::default());
    let mut host = TestHost::default();
    controller.process_key(press(kc!(Space)), &mut host);
    assert_eq!(controller.process_key(press(t), &mut host), KeyDisposition::Continue);
    assert!(host.outputs.is_empty());
    assert_eq!(controller.state().training.prev(), None);
}

#[test]
fn test_training_toggle() {
    let mut controller = create_training_controller();
    let mut host = TestHost::default();
    controller.process_key(press(kc!(Space)), &mut host);
    controller.set_training(false);
    assert_eq!(controller.process_key(press(kc!(T)), &mut host), KeyDisposition::Continue);

    controller.set_training(true);
    controller.process_key(press(kc!(Space)), &mut host);
    assert_eq!(controller.process_key(press(kc!(T)), &mut host), KeyDisposition::Consumed);
    assert_eq!(host.outputs, vec![nudge_output()]);
}

#[test]
fn test_training_key_substitution() {
    magic_sequence_test! {
        controller: create_lily58_controller(
            MagicConfig::new().with_training(true).with_default_profile(Profile::Gallium)
        ),
        sequence: [press(kc!(Dot)), release(kc!(Dot)), press(kc!(Slash)), release(kc!(Slash))],
        expected_outputs: [nudge_output()]
    };
}

#[test]
fn test_training_matches_modifiers_exactly() {
    // `>` after `-` is blocked, a plain `.` with shift held by hand isn't
    let gt = raw(shifted!(Dot));
    let mut controller = create_training_controller();
    let mut host = TestHost::default();
    controller.process_key(press(kc!(Minus)), &mut host);
    assert_eq!(controller.process_key(press(gt), &mut host), KeyDisposition::Consumed);

    let mut host = TestHost::holding(ModifierCombination::LSHIFT);
    controller.process_key(press(kc!(Minus)), &mut host);
    assert_eq!(controller.process_key(press(kc!(Dot)), &mut host), KeyDisposition::Continue);
    assert!(host.outputs.is_empty());
}

#[test]
fn test_training_ignores_held_mod_tap() {
    let space = kc!(Space);
    let t = lily58_key(Profile::Night, 3, 4);
    let (controller, _) = magic_sequence_test! {
        controller: create_training_controller(),
        sequence: [press(space), release(space), press_held(t), release_held(t)],
        expected_outputs: []
    };
    assert_eq!(controller.state().training.prev(), Some(key(HidKeyCode::Space)));
    assert_eq!(controller.last_key().map(|k| k.key), Some(key(HidKeyCode::Space)));
}

#[test]
fn test_training_skips_magic_key() {
    // The magic key itself is never blocked
    let magic = raw(arep!());
    let (controller, _) = magic_sequence_test! {
        controller: create_training_controller(),
        sequence: [press(kc!(Dot)), press(magic), release(magic), press(kc!(Y)), release(kc!(Y))],
        expected_outputs: [tap_output(HidKeyCode::Slash)]
    };
    assert_eq!(controller.state().training.prev(), Some(key(HidKeyCode::Y)));
}

#[test]
fn test_training_custom_nudge() {
    let nudge = key(HidKeyCode::Slash).with_modifiers(ModifierCombination::LSHIFT);
    magic_sequence_test! {
        controller: create_lily58_controller(MagicConfig::new().with_training(true).with_nudge(nudge)),
        sequence: [press(kc!(Comma)), press(kc!(Space)), press(kc!(Space)), press(kc!(T))],
        expected_outputs: [Output::Tap(nudge, ModifierCombination::new())]
    };
}

#[test]
fn test_training_then_magic() {
    // After a blocked key the magic key still works from it
    let t = kc!(T);
    let magic = raw(arep!());
    magic_sequence_test! {
        controller: create_training_controller(),
        sequence: [press(kc!(Space)), press(t), release(t), press(magic), release(magic)],
        expected_outputs: [nudge_output(), text_output("ion")]
    };
}

#[test]
fn test_training_skipped_without_rules() {
    // Dusk has no rules on the boaty, nothing is blocked
    let mut controller = RepeatKeyController::new(
        &boaty::REGISTRY,
        MagicConfig::new().with_training(true).with_default_profile(Profile::Dusk),
    );
    let mut host = TestHost::default();
    for keycode in [kc!(Space), kc!(T), kc!(Dot), kc!(Slash)] {
        assert_eq!(controller.process_key(press(keycode), &mut host), KeyDisposition::Continue);
        assert_eq!(controller.process_key(release(keycode), &mut host), KeyDisposition::Continue);
    }
    assert!(host.outputs.is_empty());
    assert_eq!(controller.state().training.prev(), None);
    assert_eq!(controller.last_key().map(|k| k.key), Some(key(HidKeyCode::Slash)));
}
