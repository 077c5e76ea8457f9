use strum::FromRepr;

use crate::modifier::ModifierCombination;

// Key codes from the HID usage tables, keyboard page up to the volume keys, plus modifiers
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x01,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x02,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x03,
    /// `a` and `A`
    A = 0x04,
    /// `b` and `B`
    B = 0x05,
    /// `c` and `C`
    C = 0x06,
    /// `d` and `D`
    D = 0x07,
    /// `e` and `E`
    E = 0x08,
    /// `f` and `F`
    F = 0x09,
    /// `g` and `G`
    G = 0x0A,
    /// `h` and `H`
    H = 0x0B,
    /// `i` and `I`
    I = 0x0C,
    /// `j` and `J`
    J = 0x0D,
    /// `k` and `K`
    K = 0x0E,
    /// `l` and `L`
    L = 0x0F,
    /// `m` and `M`
    M = 0x10,
    /// `n` and `N`
    N = 0x11,
    /// `o` and `O`
    O = 0x12,
    /// `p` and `P`
    P = 0x13,
    /// `q` and `Q`
    Q = 0x14,
    /// `r` and `R`
    R = 0x15,
    /// `s` and `S`
    S = 0x16,
    /// `t` and `T`
    T = 0x17,
    /// `u` and `U`
    U = 0x18,
    /// `v` and `V`
    V = 0x19,
    /// `w` and `W`
    W = 0x1A,
    /// `x` and `X`
    X = 0x1B,
    /// `y` and `Y`
    Y = 0x1C,
    /// `z` and `Z`
    Z = 0x1D,
    /// `1` and `!`
    Kc1 = 0x1E,
    /// `2` and `@`
    Kc2 = 0x1F,
    /// `3` and `#`
    Kc3 = 0x20,
    /// `4` and `$`
    Kc4 = 0x21,
    /// `5` and `%`
    Kc5 = 0x22,
    /// `6` and `^`
    Kc6 = 0x23,
    /// `7` and `&`
    Kc7 = 0x24,
    /// `8` and `*`
    Kc8 = 0x25,
    /// `9` and `(`
    Kc9 = 0x26,
    /// `0` and `)`
    Kc0 = 0x27,
    /// `Enter`
    Enter = 0x28,
    /// `Esc`
    Escape = 0x29,
    /// `Backspace`
    Backspace = 0x2A,
    /// `Tab`
    Tab = 0x2B,
    /// `Space`
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    /// Non-US `#` and `~`
    NonusHash = 0x32,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `~` and `\``
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    /// `CapsLock`
    CapsLock = 0x39,
    /// `F1`
    F1 = 0x3A,
    /// `F2`
    F2 = 0x3B,
    /// `F3`
    F3 = 0x3C,
    /// `F4`
    F4 = 0x3D,
    /// `F5`
    F5 = 0x3E,
    /// `F6`
    F6 = 0x3F,
    /// `F7`
    F7 = 0x40,
    /// `F8`
    F8 = 0x41,
    /// `F9`
    F9 = 0x42,
    /// `F10`
    F10 = 0x43,
    /// `F11`
    F11 = 0x44,
    /// `F12`
    F12 = 0x45,
    /// Print Screen
    PrintScreen = 0x46,
    /// Scroll Lock
    ScrollLock = 0x47,
    /// Pause
    Pause = 0x48,
    /// Insert
    Insert = 0x49,
    /// Home
    Home = 0x4A,
    /// Page Up
    PageUp = 0x4B,
    /// Delete
    Delete = 0x4C,
    /// End
    End = 0x4D,
    /// Page Down
    PageDown = 0x4E,
    /// Right arrow
    Right = 0x4F,
    /// Left arrow
    Left = 0x50,
    /// Down arrow
    Down = 0x51,
    /// Up arrow
    Up = 0x52,
    /// Nums Lock
    NumLock = 0x53,
    /// `/` on keypad
    KpSlash = 0x54,
    /// `*` on keypad
    KpAsterisk = 0x55,
    /// `-` on keypad
    KpMinus = 0x56,
    /// `+` on keypad
    KpPlus = 0x57,
    /// `Enter` on keypad
    KpEnter = 0x58,
    /// `1` on keypad
    Kp1 = 0x59,
    /// `2` on keypad
    Kp2 = 0x5A,
    /// `3` on keypad
    Kp3 = 0x5B,
    /// `4` on keypad
    Kp4 = 0x5C,
    /// `5` on keypad
    Kp5 = 0x5D,
    /// `6` on keypad
    Kp6 = 0x5E,
    /// `7` on keypad
    Kp7 = 0x5F,
    /// `8` on keypad
    Kp8 = 0x60,
    /// `9` on keypad
    Kp9 = 0x61,
    /// `0` on keypad
    Kp0 = 0x62,
    /// `.` on keypad
    KpDot = 0x63,
    /// Non-US `\` or `|`
    NonusBackslash = 0x64,
    /// `Application`
    Application = 0x65,
    /// `Power`
    KbPower = 0x66,
    /// `=` on keypad
    KpEqual = 0x67,
    /// `F13`
    F13 = 0x68,
    /// `F14`
    F14 = 0x69,
    /// `F15`
    F15 = 0x6A,
    /// `F16`
    F16 = 0x6B,
    /// `F17`
    F17 = 0x6C,
    /// `F18`
    F18 = 0x6D,
    /// `F19`
    F19 = 0x6E,
    /// `F20`
    F20 = 0x6F,
    /// `F21`
    F21 = 0x70,
    /// `F22`
    F22 = 0x71,
    /// `F23`
    F23 = 0x72,
    /// `F24`
    F24 = 0x73,
    Execute = 0x74,
    Help = 0x75,
    Menu = 0x76,
    Select = 0x77,
    Stop = 0x78,
    Again = 0x79,
    Undo = 0x7A,
    Cut = 0x7B,
    Copy = 0x7C,
    Paste = 0x7D,
    Find = 0x7E,
    /// Mute
    KbMute = 0x7F,
    /// Volume Up
    KbVolumeUp = 0x80,
    /// Volume Down
    KbVolumeDown = 0x81,
    /// Left Control
    LCtrl = 0xE0,
    /// Left Shift
    LShift = 0xE1,
    /// Left Alt
    LAlt = 0xE2,
    /// Left GUI
    LGui = 0xE3,
    /// Right Control
    RCtrl = 0xE4,
    /// Right Shift
    RShift = 0xE5,
    /// Right Alt
    RAlt = 0xE6,
    /// Right GUI
    RGui = 0xE7,
}

impl HidKeyCode {
    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    /// Returns `true` for the 26 letter keys
    pub fn is_letter(self) -> bool {
        HidKeyCode::A <= self && self <= HidKeyCode::Z
    }
}

/// Keys handled by the engine itself, never sent to the host
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecialKey {
    /// Plain repeat: sends the remembered key again
    Repeat,
    /// Alternate repeat: the magic key
    AltRepeat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Hid(HidKeyCode),
    Special(SpecialKey),
    /// A keycode the engine doesn't interpret, kept as its raw 16-bit value
    Other(u16),
}

impl From<HidKeyCode> for KeyCode {
    fn from(value: HidKeyCode) -> Self {
        KeyCode::Hid(value)
    }
}

impl KeyCode {
    pub fn is_repeat_key(&self) -> bool {
        matches!(self, KeyCode::Special(_))
    }
}

/// The identity of a key as seen by the repeat engine: a keycode plus the
/// modifiers encoded into it. Two identities are equal only when both parts
/// are equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyIdentity {
    pub key: KeyCode,
    pub modifiers: ModifierCombination,
}

impl Default for KeyIdentity {
    fn default() -> Self {
        Self::NONE
    }
}

impl KeyIdentity {
    /// The "no key" identity
    pub const NONE: Self = Self::hid(HidKeyCode::No);
    pub const REPEAT: Self = Self::new(KeyCode::Special(SpecialKey::Repeat), ModifierCombination::new());
    pub const ALT_REPEAT: Self = Self::new(KeyCode::Special(SpecialKey::AltRepeat), ModifierCombination::new());

    pub const fn new(key: KeyCode, modifiers: ModifierCombination) -> Self {
        Self { key, modifiers }
    }

    /// A plain HID key without modifiers
    pub const fn hid(key: HidKeyCode) -> Self {
        Self::new(KeyCode::Hid(key), ModifierCombination::new())
    }

    pub const fn with_modifiers(self, modifiers: ModifierCombination) -> Self {
        Self::new(self.key, modifiers)
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    pub fn is_repeat_key(&self) -> bool {
        self.key.is_repeat_key()
    }

    /// Returns `true` for the eight modifier keycodes
    pub fn is_modifier(&self) -> bool {
        match self.key {
            KeyCode::Hid(k) => k.is_modifier(),
            _ => false,
        }
    }

    /// Identity that types `ascii` on an en-us layout. Shifted characters carry the shift modifier.
    pub fn from_ascii(ascii: u8) -> Self {
        let (key, shifted) = from_ascii(ascii);
        let modifiers = if shifted {
            ModifierCombination::LSHIFT
        } else {
            ModifierCombination::new()
        };
        Self::hid(key).with_modifiers(modifiers)
    }
}

/// Convert an ascii char to keycode, returns the keycode and whether shift is needed.
/// Assumes en-us keyboard mapping
pub fn from_ascii(ascii: u8) -> (HidKeyCode, bool) {
    match ascii {
        b'0' => (HidKeyCode::Kc0, false),
        b'1'..=b'9' => (HidKeyCode::from_repr(ascii - b'1' + HidKeyCode::Kc1 as u8).unwrap_or(HidKeyCode::No), false),
        b'a'..=b'z' => (HidKeyCode::from_repr(ascii - b'a' + HidKeyCode::A as u8).unwrap_or(HidKeyCode::No), false),
        b'A'..=b'Z' => (HidKeyCode::from_repr(ascii - b'A' + HidKeyCode::A as u8).unwrap_or(HidKeyCode::No), true),
        b'!' => (HidKeyCode::Kc1, true),
        b'@' => (HidKeyCode::Kc2, true),
        b'#' => (HidKeyCode::Kc3, true),
        b'$' => (HidKeyCode::Kc4, true),
        b'%' => (HidKeyCode::Kc5, true),
        b'^' => (HidKeyCode::Kc6, true),
        b'&' => (HidKeyCode::Kc7, true),
        b'*' => (HidKeyCode::Kc8, true),
        b'(' => (HidKeyCode::Kc9, true),
        b')' => (HidKeyCode::Kc0, true),
        b'-' => (HidKeyCode::Minus, false),
        b'_' => (HidKeyCode::Minus, true),
        b'=' => (HidKeyCode::Equal, false),
        b'+' => (HidKeyCode::Equal, true),
        b'[' => (HidKeyCode::LeftBracket, false),
        b']' => (HidKeyCode::RightBracket, false),
        b'{' => (HidKeyCode::LeftBracket, true),
        b'}' => (HidKeyCode::RightBracket, true),
        b';' => (HidKeyCode::Semicolon, false),
        b':' => (HidKeyCode::Semicolon, true),
        b'\'' => (HidKeyCode::Quote, false),
        b'"' => (HidKeyCode::Quote, true),
        b'`' => (HidKeyCode::Grave, false),
        b'~' => (HidKeyCode::Grave, true),
        b'\\' => (HidKeyCode::Backslash, false),
        b'|' => (HidKeyCode::Backslash, true),
        b',' => (HidKeyCode::Comma, false),
        b'<' => (HidKeyCode::Comma, true),
        b'.' => (HidKeyCode::Dot, false),
        b'>' => (HidKeyCode::Dot, true),
        b'/' => (HidKeyCode::Slash, false),
        b'?' => (HidKeyCode::Slash, true),
        b' ' => (HidKeyCode::Space, false),
        b'\n' => (HidKeyCode::Enter, false),
        b'\t' => (HidKeyCode::Tab, false),
        b'\x08' => (HidKeyCode::Backspace, false),
        b'\x1B' => (HidKeyCode::Escape, false),
        b'\x7F' => (HidKeyCode::Delete, false),
        _ => (HidKeyCode::No, false),
    }
}
