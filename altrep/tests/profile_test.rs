pub mod common;

use altrep::action::{Action, KeyAction};
use altrep::config::MagicConfig;
use altrep::controller::{KeyDisposition, RepeatKeyController, SharedController};
use altrep::keycode::HidKeyCode;
use altrep::keymaps::{boaty, lily58};
use altrep::modifier::ModifierCombination;
use altrep::profile::Profile;
use altrep::registry::LayoutRegistry;
use altrep::{arep, df, rep, shifted};

use crate::common::{Output, TestHost, create_lily58_controller, key, press, raw, release, tap_output, text_output};

static SHARED: SharedController<&'static LayoutRegistry> =
    SharedController::new(RepeatKeyController::new(&boaty::REGISTRY, MagicConfig::new()));

#[test]
fn test_profile_switch() {
    let mut controller = create_lily58_controller(MagicConfig::default());
    let mut host = TestHost::default();
    assert_eq!(controller.active_profile(), Profile::Night);

    for (layer, profile) in [
        (1, Profile::Gallium),
        (2, Profile::Dusk),
        (3, Profile::Racket),
        (0, Profile::Night),
    ] {
        let df = raw(KeyAction::Single(Action::DefaultLayer(layer)));
        // The host still switches its default layer
        assert_eq!(controller.process_key(press(df), &mut host), KeyDisposition::Continue);
        assert_eq!(controller.process_key(release(df), &mut host), KeyDisposition::Continue);
        assert_eq!(controller.active_profile(), profile);
    }
    assert!(host.outputs.is_empty());
}

#[test]
fn test_profile_switch_unknown_layer() {
    let mut controller = create_lily58_controller(MagicConfig::default());
    let mut host = TestHost::default();
    controller.process_key(press(raw(df!(1))), &mut host);
    assert_eq!(controller.process_key(press(raw(df!(9))), &mut host), KeyDisposition::Continue);
    assert_eq!(controller.active_profile(), Profile::Gallium);
}

#[test]
fn test_profile_switch_keeps_last_key() {
    let magic = raw(arep!());
    magic_sequence_test! {
        controller: create_lily58_controller(MagicConfig::default()),
        sequence: [
            press(kc!(Dot)),
            release(kc!(Dot)),
            press(raw(df!(3))),
            release(raw(df!(3))),
            press(magic),
            release(magic),
        ],
        expected_outputs: [tap_output(HidKeyCode::Slash)]
    };
}

#[test]
fn test_same_key_per_profile() {
    let magic = raw(arep!());
    let expected = [
        (0, tap_output(HidKeyCode::O)),
        (1, tap_output(HidKeyCode::Y)),
        // No rule for `a` in Dusk and Racket
        (2, tap_output(HidKeyCode::A)),
        (3, tap_output(HidKeyCode::A)),
    ];
    let mut controller = create_lily58_controller(MagicConfig::default());
    for (layer, output) in expected {
        let mut host = TestHost::default();
        let df = raw(KeyAction::Single(Action::DefaultLayer(layer)));
        controller.process_key(press(df), &mut host);
        controller.process_key(press(kc!(A)), &mut host);
        controller.process_key(press(magic), &mut host);
        assert_eq!(host.outputs, vec![output], "layer {}", layer);
    }
}

#[test]
fn test_space_per_profile() {
    let magic = raw(arep!());
    let mut controller = create_lily58_controller(MagicConfig::default());
    for layer in [0, 2, 3] {
        let mut host = TestHost::default();
        let df = raw(KeyAction::Single(Action::DefaultLayer(layer)));
        controller.process_key(press(df), &mut host);
        controller.process_key(press(kc!(Space)), &mut host);
        controller.process_key(press(magic), &mut host);
        assert_eq!(host.outputs, vec![text_output("the")]);
    }

    // Gallium has no space rule, space is repeated
    let mut host = TestHost::default();
    controller.process_key(press(raw(df!(1))), &mut host);
    controller.process_key(press(kc!(Space)), &mut host);
    controller.process_key(press(magic), &mut host);
    assert_eq!(host.outputs, vec![tap_output(HidKeyCode::Space)]);
}

#[test]
fn test_boaty_bunya() {
    let magic = raw(arep!());
    let (controller, _) = magic_sequence_test! {
        controller: RepeatKeyController::new(&boaty::REGISTRY, MagicConfig::new().with_default_profile(Profile::Bunya)),
        sequence: [press(kc!(Slash)), release(kc!(Slash)), press(magic), release(magic)],
        expected_outputs: [Output::Tap(key(HidKeyCode::Dot).with_modifiers(ModifierCombination::LSHIFT), ModifierCombination::new())]
    };
    assert_eq!(controller.active_profile(), Profile::Bunya);
}

#[test]
fn test_boaty_has_no_dusk() {
    // Dusk is a lily58 profile, the magic key falls through to the host
    let magic = raw(arep!());
    let mut controller = RepeatKeyController::new(&boaty::REGISTRY, MagicConfig::new().with_default_profile(Profile::Dusk));
    let mut host = TestHost::default();
    controller.process_key(press(kc!(Dot)), &mut host);
    assert_eq!(controller.process_key(press(magic), &mut host), KeyDisposition::Continue);
    assert!(host.outputs.is_empty());

    // Switching to a known profile recovers
    controller.process_key(press(raw(df!(2))), &mut host);
    assert_eq!(controller.active_profile(), Profile::Bunya);
    assert_eq!(controller.process_key(press(magic), &mut host), KeyDisposition::Consumed);
    assert_eq!(host.outputs, vec![tap_output(HidKeyCode::Slash)]);
}

#[test]
fn test_boaty_dusk_release_matches_press() {
    let magic = raw(arep!());
    let repeat = raw(rep!());
    let mut controller = RepeatKeyController::new(&boaty::REGISTRY, MagicConfig::new().with_default_profile(Profile::Dusk));
    let mut host = TestHost::default();
    controller.process_key(press(kc!(Dot)), &mut host);

    // The host saw the magic key press, so it gets the release too
    let pressed = controller.process_key(press(magic), &mut host);
    let released = controller.process_key(release(magic), &mut host);
    assert_eq!(pressed, KeyDisposition::Continue);
    assert_eq!(released, pressed);
    assert!(host.outputs.is_empty());

    // The repeat key needs no rules
    let pressed = controller.process_key(press(repeat), &mut host);
    let released = controller.process_key(release(repeat), &mut host);
    assert_eq!(pressed, KeyDisposition::Consumed);
    assert_eq!(released, pressed);
    assert_eq!(host.outputs, vec![tap_output(HidKeyCode::Dot)]);
}

#[test]
fn test_reset_to_configured_profile() {
    let mut controller = create_lily58_controller(MagicConfig::new().with_default_profile(Profile::Racket));
    let mut host = TestHost::default();
    assert_eq!(controller.active_profile(), Profile::Racket);
    controller.process_key(press(raw(df!(0))), &mut host);
    controller.process_key(press(raw(shifted!(A))), &mut host);
    assert_eq!(controller.active_profile(), Profile::Night);

    controller.reset();
    assert_eq!(controller.active_profile(), Profile::Racket);
    assert_eq!(controller.last_key(), None);
}

#[test]
fn test_shared_controller() {
    let magic = raw(arep!());
    let mut host = TestHost::default();
    SHARED.process_key(press(kc!(Comma)), &mut host);
    assert_eq!(SHARED.process_key(press(magic), &mut host), KeyDisposition::Consumed);
    assert_eq!(host.outputs, vec![text_output(" but")]);

    SHARED.process_key(press(raw(df!(3))), &mut host);
    assert_eq!(SHARED.with(|c| c.active_profile()), Profile::Racket);
    SHARED.with(|c| c.reset());
    assert_eq!(SHARED.with(|c| c.active_profile()), Profile::Night);
}

#[test]
fn test_lily58_registry_in_shared() {
    let shared = SharedController::new(RepeatKeyController::new(&lily58::REGISTRY, MagicConfig::default()));
    let mut host = TestHost::default();
    shared.process_key(press(kc!(U)), &mut host);
    shared.process_key(press(raw(arep!())), &mut host);
    assert_eq!(host.outputs, vec![tap_output(HidKeyCode::E)]);
}
