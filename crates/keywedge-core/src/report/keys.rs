//! Key input model: named control keys and literal characters.
//!
//! A report is built from an ordered list of [`KeyInput`] items.  Literal
//! printable characters ([`KeyInput::Char`]) are resolved through the
//! selected [`Layout`](crate::layout::Layout); named control keys
//! ([`KeyInput::Control`]) carry their own HID usage id and never consult
//! the layout, because control keys are position-coded and identical
//! across keyboard arrangements.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page
//! 0x07).

use serde::{Deserialize, Serialize};

/// A named non-printable or modifier key.
///
/// The numeric value of each variant is its HID Usage ID on the
/// keyboard/keypad page.  Modifier keys occupy the dedicated usage range
/// 0xE0–0xE7 and are reported through the modifier bit field rather than
/// a usage slot; see [`ControlKey::modifier_bit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ControlKey {
    // Control keys (HID 0x28–0x39)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Application key (HID 0x65)
    Menu = 0x65,

    // Modifier keys (HID 0xE0–0xE7)
    LeftControl = 0xE0,
    LeftShift = 0xE1,
    LeftAlt = 0xE2,
    LeftGui = 0xE3,
    RightControl = 0xE4,
    RightShift = 0xE5,
    RightAlt = 0xE6,
    RightGui = 0xE7,
}

impl ControlKey {
    /// Returns the raw HID Usage ID for this key.
    pub fn usage_id(self) -> u8 {
        self as u8
    }

    /// Returns the modifier bit this key contributes to byte 0 of the
    /// report, or `None` for keys reported through a usage slot.
    ///
    /// Modifier usages 0xE0–0xE7 map to modifier bits 0–7 in the same
    /// order, so the bit position is the usage's offset into that range.
    pub fn modifier_bit(self) -> Option<u8> {
        let usage = self.usage_id();
        if (0xE0..=0xE7).contains(&usage) {
            Some(1 << (usage - 0xE0))
        } else {
            None
        }
    }

    /// Returns `true` if this is a modifier key.
    pub fn is_modifier(self) -> bool {
        self.modifier_bit().is_some()
    }
}

/// One item of a key list: either a literal character or a named control
/// key.
///
/// The two kinds may be freely mixed in a single list; the [`keys!`]
/// macro builds such mixed lists from plain `char` and [`ControlKey`]
/// expressions.
///
/// [`keys!`]: crate::keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    /// A literal printable character, resolved through the layout.
    Char(char),
    /// A named control or modifier key, resolved through the fixed HID
    /// usage table.
    Control(ControlKey),
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        KeyInput::Char(c)
    }
}

impl From<ControlKey> for KeyInput {
    fn from(key: ControlKey) -> Self {
        KeyInput::Control(key)
    }
}

/// Builds a `[KeyInput; N]` array from a mixed list of `char` and
/// [`ControlKey`] expressions.
///
/// This restores the ergonomics of a variadic key list:
///
/// ```rust
/// use keywedge_core::{encode_report, keys, layout, ControlKey};
///
/// let layout = layout::us_qwerty();
/// let report = encode_report(&layout, &keys![ControlKey::LeftGui, 'r'])
///     .expect("all keys map on US QWERTY");
/// assert!(report.modifiers.gui());
/// ```
#[macro_export]
macro_rules! keys {
    ($($key:expr),+ $(,)?) => {
        [$($crate::report::keys::KeyInput::from($key)),+]
    };
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::boot::ModifierFlags;

    #[test]
    fn test_usage_ids_match_hid_keyboard_page() {
        assert_eq!(ControlKey::Enter.usage_id(), 0x28);
        assert_eq!(ControlKey::Escape.usage_id(), 0x29);
        assert_eq!(ControlKey::Backspace.usage_id(), 0x2A);
        assert_eq!(ControlKey::Tab.usage_id(), 0x2B);
        assert_eq!(ControlKey::F1.usage_id(), 0x3A);
        assert_eq!(ControlKey::F12.usage_id(), 0x45);
        assert_eq!(ControlKey::ArrowUp.usage_id(), 0x52);
        assert_eq!(ControlKey::LeftControl.usage_id(), 0xE0);
        assert_eq!(ControlKey::RightGui.usage_id(), 0xE7);
    }

    #[test]
    fn test_modifier_keys_map_to_their_hid_bits() {
        let expected = [
            (ControlKey::LeftControl, ModifierFlags::LEFT_CTRL),
            (ControlKey::LeftShift, ModifierFlags::LEFT_SHIFT),
            (ControlKey::LeftAlt, ModifierFlags::LEFT_ALT),
            (ControlKey::LeftGui, ModifierFlags::LEFT_GUI),
            (ControlKey::RightControl, ModifierFlags::RIGHT_CTRL),
            (ControlKey::RightShift, ModifierFlags::RIGHT_SHIFT),
            (ControlKey::RightAlt, ModifierFlags::RIGHT_ALT),
            (ControlKey::RightGui, ModifierFlags::RIGHT_GUI),
        ];
        for (key, bit) in expected {
            assert_eq!(
                key.modifier_bit(),
                Some(bit),
                "{key:?} should contribute modifier bit 0x{bit:02X}"
            );
            assert!(key.is_modifier(), "{key:?} should be a modifier key");
        }
    }

    #[test]
    fn test_non_modifier_keys_have_no_modifier_bit() {
        for key in [
            ControlKey::Enter,
            ControlKey::Backspace,
            ControlKey::F5,
            ControlKey::Home,
            ControlKey::ArrowLeft,
            ControlKey::Menu,
        ] {
            assert_eq!(key.modifier_bit(), None, "{key:?} is not a modifier");
            assert!(!key.is_modifier());
        }
    }

    #[test]
    fn test_key_input_from_conversions() {
        assert_eq!(KeyInput::from('x'), KeyInput::Char('x'));
        assert_eq!(
            KeyInput::from(ControlKey::Enter),
            KeyInput::Control(ControlKey::Enter)
        );
    }

    #[test]
    fn test_keys_macro_builds_mixed_list_in_order() {
        let list = keys![ControlKey::LeftGui, 'r'];
        assert_eq!(
            list,
            [
                KeyInput::Control(ControlKey::LeftGui),
                KeyInput::Char('r'),
            ]
        );
    }

    #[test]
    fn test_keys_macro_accepts_trailing_comma() {
        let list = keys!['a', 'b',];
        assert_eq!(list, [KeyInput::Char('a'), KeyInput::Char('b')]);
    }
}
