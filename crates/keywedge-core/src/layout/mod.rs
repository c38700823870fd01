//! Keyboard layout tables mapping characters to HID usage ids.
//!
//! A [`Layout`] answers one question: which key (HID usage id), with or
//! without Shift, produces a given character on a particular keyboard
//! arrangement.  Control keys never appear in a layout: they are
//! position-coded and resolve through the fixed table in
//! [`ControlKey`](crate::report::ControlKey).
//!
//! Layouts are plain serde-ready values, so tables beyond the built-in
//! [`us_qwerty`] one can be supplied from configuration loaded elsewhere.
//! The core only ever reads a layout after construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod registry;
pub mod us_qwerty;

pub use registry::{active_layout, set_layout};
pub use us_qwerty::us_qwerty;

/// The key stroke producing one character: a HID usage id plus whether
/// the Shift modifier is required.
///
/// `'1'` on US QWERTY is `{ usage: 0x1E, shift: false }`; `'!'` is the
/// same key shifted, `{ usage: 0x1E, shift: true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStroke {
    /// HID Usage ID on the keyboard/keypad page (0x07).
    pub usage: u8,
    /// `true` if the character requires a Shift modifier on this layout.
    pub shift: bool,
}

impl KeyStroke {
    /// A stroke without Shift.
    pub const fn plain(usage: u8) -> Self {
        Self { usage, shift: false }
    }

    /// A stroke with Shift held.
    pub const fn shifted(usage: u8) -> Self {
        Self { usage, shift: true }
    }
}

/// A named character → [`KeyStroke`] mapping for one keyboard
/// arrangement.
///
/// Uppercase ASCII letters are intentionally absent from layout tables:
/// the encoder derives them from the lowercase entry plus Shift, the way
/// a typist does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    name: String,
    map: HashMap<char, KeyStroke>,
}

impl Layout {
    /// Creates a layout from `(character, stroke)` pairs.
    ///
    /// Later entries overwrite earlier ones for the same character.
    pub fn new(name: impl Into<String>, entries: &[(char, KeyStroke)]) -> Self {
        Self {
            name: name.into(),
            map: entries.iter().copied().collect(),
        }
    }

    /// The layout's name (e.g. `"us-qwerty"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves a character to its key stroke, or `None` if the layout
    /// has no key producing it.
    pub fn lookup(&self, c: char) -> Option<KeyStroke> {
        self.map.get(&c).copied()
    }

    /// Number of characters the layout can produce.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the layout maps no characters at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_layout() -> Layout {
        Layout::new(
            "tiny",
            &[
                ('a', KeyStroke::plain(0x04)),
                ('!', KeyStroke::shifted(0x1E)),
            ],
        )
    }

    #[test]
    fn test_lookup_returns_stroke_for_known_character() {
        let layout = tiny_layout();
        assert_eq!(layout.lookup('a'), Some(KeyStroke::plain(0x04)));
    }

    #[test]
    fn test_lookup_preserves_shift_metadata() {
        let layout = tiny_layout();
        let stroke = layout.lookup('!').expect("'!' is in the table");
        assert!(stroke.shift);
        assert_eq!(stroke.usage, 0x1E);
    }

    #[test]
    fn test_lookup_returns_none_for_unknown_character() {
        let layout = tiny_layout();
        assert_eq!(layout.lookup('ß'), None);
    }

    #[test]
    fn test_later_entries_overwrite_earlier_ones() {
        let layout = Layout::new(
            "dup",
            &[
                ('a', KeyStroke::plain(0x04)),
                ('a', KeyStroke::plain(0x05)),
            ],
        );
        assert_eq!(layout.lookup('a'), Some(KeyStroke::plain(0x05)));
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn test_empty_layout_reports_empty() {
        let layout = Layout::new("empty", &[]);
        assert!(layout.is_empty());
        assert_eq!(layout.len(), 0);
    }

    #[test]
    fn test_name_is_preserved() {
        assert_eq!(tiny_layout().name(), "tiny");
    }
}
