pub mod test_macro;

use altrep::action::KeyAction;
use altrep::config::MagicConfig;
use altrep::controller::{HostKeyboard, KeyEvent, RepeatKeyController, TapRecord};
use altrep::encoding::encode;
use altrep::keycode::{HidKeyCode, KeyIdentity};
use altrep::keymaps::lily58;
use altrep::modifier::ModifierCombination;
use altrep::profile::Profile;
use altrep::registry::LayoutRegistry;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Something the controller sent to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Tap(KeyIdentity, ModifierCombination),
    Text(String),
}

/// Host double recording every keystroke
#[derive(Debug, Default)]
pub struct TestHost {
    /// Modifiers the user is holding
    pub held: ModifierCombination,
    pub outputs: Vec<Output>,
}

impl TestHost {
    pub fn holding(held: ModifierCombination) -> Self {
        Self {
            held,
            outputs: Vec::new(),
        }
    }
}

impl HostKeyboard for TestHost {
    fn active_modifiers(&self) -> ModifierCombination {
        self.held
    }

    fn tap_key(&mut self, key: KeyIdentity, modifiers: ModifierCombination) {
        self.outputs.push(Output::Tap(key, modifiers));
    }

    fn send_text(&mut self, text: &str) {
        self.outputs.push(Output::Text(text.to_string()));
    }
}

pub fn create_lily58_controller(config: MagicConfig) -> RepeatKeyController<&'static LayoutRegistry> {
    RepeatKeyController::new(&lily58::REGISTRY, config)
}

pub fn create_training_controller() -> RepeatKeyController<&'static LayoutRegistry> {
    create_lily58_controller(MagicConfig::new().with_training(true))
}

/// Raw keycode of a key action
pub fn raw(action: KeyAction) -> u16 {
    encode(action).expect("key action should be encodable")
}

/// Raw keycode at a position of a lily58 base layer
pub fn lily58_key(profile: Profile, row: usize, col: usize) -> u16 {
    raw(lily58::REGISTRY.key_at(profile, row, col))
}

/// The magic key of a lily58 base layer
pub fn lily58_magic(profile: Profile) -> u16 {
    match profile {
        Profile::Gallium => lily58_key(profile, 4, 2),
        _ => lily58_key(profile, 4, 3),
    }
}

pub fn press(keycode: u16) -> KeyEvent {
    KeyEvent::press(keycode)
}

pub fn release(keycode: u16) -> KeyEvent {
    KeyEvent::release(keycode)
}

/// Press of a tap-hold key which the host decided to hold
pub fn press_held(keycode: u16) -> KeyEvent {
    KeyEvent::press(keycode).with_tap(TapRecord::hold())
}

/// Release of a tap-hold key which the host decided to hold
pub fn release_held(keycode: u16) -> KeyEvent {
    KeyEvent::release(keycode).with_tap(TapRecord::hold())
}

pub fn key(k: HidKeyCode) -> KeyIdentity {
    KeyIdentity::hid(k)
}

pub fn tap_output(k: HidKeyCode) -> Output {
    Output::Tap(KeyIdentity::hid(k), ModifierCombination::new())
}

pub fn text_output(text: &str) -> Output {
    Output::Text(text.to_string())
}

/// The `#` sent by training mode
pub fn nudge_output() -> Output {
    Output::Tap(
        KeyIdentity::hid(HidKeyCode::Kc3).with_modifiers(ModifierCombination::LSHIFT),
        ModifierCombination::new(),
    )
}
