/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Hid(
            $crate::keycode::HidKeyCode::$k,
        )))
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::KeyWithModifier(
            $crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$x),
            $m,
        ))
    };
}

/// Create a shifted key
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!($x, $crate::modifier::ModifierCombination::LSHIFT)
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($x))
    };
}

/// Create a layer activate action or tap key(tap/hold)
#[macro_export]
macro_rules! lt {
    ($x: literal, $k: ident) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$k)),
            $crate::action::Action::LayerOn($x),
        )
    };
}

/// Create a modifier-tap-hold action
#[macro_export]
macro_rules! mt {
    ($k: ident, $m: expr) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$k)),
            $crate::action::Action::Modifier($m),
        )
    };
}

/// Create a switch default layer action, which also switches the profile. `n` is the layer number
#[macro_export]
macro_rules! df {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::DefaultLayer($x))
    };
}

/// The repeat key
#[macro_export]
macro_rules! rep {
    () => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Special(
            $crate::keycode::SpecialKey::Repeat,
        )))
    };
}

/// The alternate-repeat (magic) key
#[macro_export]
macro_rules! arep {
    () => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Special(
            $crate::keycode::SpecialKey::AltRepeat,
        )))
    };
}

/// Alternate-repeat on tap, modifier on hold
#[macro_export]
macro_rules! mt_arep {
    ($m: expr) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::Special($crate::keycode::SpecialKey::AltRepeat)),
            $crate::action::Action::Modifier($m),
        )
    };
}

/// Alternate-repeat on tap, layer on hold
#[macro_export]
macro_rules! lt_arep {
    ($x: literal) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::Special($crate::keycode::SpecialKey::AltRepeat)),
            $crate::action::Action::LayerOn($x),
        )
    };
}

/// Create an alternate-repeat rule.
///
/// - `rule!(Dot => Slash)` taps `/` after `.`
/// - `rule!(Minus => Shift + Dot)` taps `>` after `-`
/// - `rule!(Space => "the")` types `the` after a space
#[macro_export]
macro_rules! rule {
    ($t: ident => $text: literal) => {
        $crate::registry::SubstitutionRule::new(
            $crate::keycode::KeyIdentity::hid($crate::keycode::HidKeyCode::$t),
            $crate::registry::Outcome::EmitText($text),
        )
    };
    ($t: ident => Shift + $k: ident) => {
        $crate::registry::SubstitutionRule::new(
            $crate::keycode::KeyIdentity::hid($crate::keycode::HidKeyCode::$t),
            $crate::registry::Outcome::EmitKey(
                $crate::keycode::KeyIdentity::hid($crate::keycode::HidKeyCode::$k)
                    .with_modifiers($crate::modifier::ModifierCombination::LSHIFT),
            ),
        )
    };
    ($t: ident => $k: ident) => {
        $crate::registry::SubstitutionRule::new(
            $crate::keycode::KeyIdentity::hid($crate::keycode::HidKeyCode::$t),
            $crate::registry::Outcome::EmitKey($crate::keycode::KeyIdentity::hid($crate::keycode::HidKeyCode::$k)),
        )
    };
}
