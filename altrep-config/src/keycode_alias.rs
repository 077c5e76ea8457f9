use std::collections::HashMap;

use altrep_types::keycode::{HidKeyCode, KeyIdentity};
use altrep_types::modifier::ModifierCombination;
use once_cell::sync::Lazy;

use crate::error::{ConfigError, ConfigResult};

/// Lowercase key names accepted in the config, including the shifted
/// symbols of an en-us layout (`gt` is Shift + Dot)
pub static KEYCODE_ALIAS: Lazy<HashMap<&str, KeyIdentity>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! add_alias {
        ($keycode:ident) => {
            m.insert(paste::paste!{ stringify!([<$keycode:lower>]) }, KeyIdentity::hid(HidKeyCode::$keycode));
        };
        ($keycode:ident = $( $alias:expr),*) => {
            add_alias!($keycode);
            $(
                m.insert($alias, KeyIdentity::hid(HidKeyCode::$keycode));
            )*
        };
    }

    macro_rules! add_shifted {
        ($keycode:ident = $( $alias:expr),*) => {
            $(
                m.insert($alias, KeyIdentity::hid(HidKeyCode::$keycode).with_modifiers(ModifierCombination::LSHIFT));
            )*
        };
    }

    add_alias!(A);
    add_alias!(B);
    add_alias!(C);
    add_alias!(D);
    add_alias!(E);
    add_alias!(F);
    add_alias!(G);
    add_alias!(H);
    add_alias!(I);
    add_alias!(J);
    add_alias!(K);
    add_alias!(L);
    add_alias!(M);
    add_alias!(N);
    add_alias!(O);
    add_alias!(P);
    add_alias!(Q);
    add_alias!(R);
    add_alias!(S);
    add_alias!(T);
    add_alias!(U);
    add_alias!(V);
    add_alias!(W);
    add_alias!(X);
    add_alias!(Y);
    add_alias!(Z);
    add_alias!(Kc1 = "1");
    add_alias!(Kc2 = "2");
    add_alias!(Kc3 = "3");
    add_alias!(Kc4 = "4");
    add_alias!(Kc5 = "5");
    add_alias!(Kc6 = "6");
    add_alias!(Kc7 = "7");
    add_alias!(Kc8 = "8");
    add_alias!(Kc9 = "9");
    add_alias!(Kc0 = "0");
    add_alias!(Enter = "ent");
    add_alias!(Escape = "esc");
    add_alias!(Backspace = "bspc");
    add_alias!(Tab);
    add_alias!(Space = "spc");
    add_alias!(Minus = "mins");
    add_alias!(Equal = "eql");
    add_alias!(LeftBracket = "lbrc");
    add_alias!(RightBracket = "rbrc");
    add_alias!(Backslash = "bsls");
    add_alias!(Semicolon = "scln");
    add_alias!(Quote = "quot");
    add_alias!(Grave = "grv");
    add_alias!(Comma = "comm");
    add_alias!(Dot);
    add_alias!(Slash = "slsh");
    add_alias!(Delete = "del");
    add_alias!(F1);
    add_alias!(F2);
    add_alias!(F3);
    add_alias!(F4);
    add_alias!(F5);
    add_alias!(F6);
    add_alias!(F7);
    add_alias!(F8);
    add_alias!(F9);
    add_alias!(F10);
    add_alias!(F11);
    add_alias!(F12);
    add_alias!(Home);
    add_alias!(End);
    add_alias!(PageUp = "pgup");
    add_alias!(PageDown = "pgdn");
    add_alias!(Left);
    add_alias!(Right);
    add_alias!(Up);
    add_alias!(Down);

    add_shifted!(Kc1 = "exlm");
    add_shifted!(Kc2 = "at");
    add_shifted!(Kc3 = "hash");
    add_shifted!(Kc4 = "dlr");
    add_shifted!(Kc5 = "perc");
    add_shifted!(Kc6 = "circ");
    add_shifted!(Kc7 = "ampr");
    add_shifted!(Kc8 = "astr");
    add_shifted!(Kc9 = "lprn");
    add_shifted!(Kc0 = "rprn");
    add_shifted!(Minus = "unds");
    add_shifted!(Equal = "plus");
    add_shifted!(LeftBracket = "lcbr");
    add_shifted!(RightBracket = "rcbr");
    add_shifted!(Backslash = "pipe");
    add_shifted!(Semicolon = "coln");
    add_shifted!(Quote = "dqt");
    add_shifted!(Grave = "tild");
    add_shifted!(Comma = "lt");
    add_shifted!(Dot = "gt");
    add_shifted!(Slash = "ques");

    m
});

/// Parse a key name: an alias (case-insensitive) or a single printable character
pub fn parse_key(field: &str, name: &str) -> ConfigResult<KeyIdentity> {
    let trimmed = name.trim();
    if let Some(key) = KEYCODE_ALIAS.get(trimmed.to_lowercase().as_str()) {
        return Ok(*key);
    }
    if let [c] = trimmed.as_bytes()
        && c.is_ascii_graphic()
    {
        let key = KeyIdentity::from_ascii(*c);
        if !key.is_none() {
            return Ok(key);
        }
    }
    Err(ConfigError::UnknownKey {
        field: field.to_string(),
        name: name.to_string(),
    })
}
