//! Built-in US QWERTY layout table.
//!
//! Maps printable ASCII to HID usage ids per the US physical arrangement.
//! Usage values follow USB HID Usage Tables 1.3, Section 10
//! (Keyboard/Keypad page 0x07).
//!
//! Letters map to their *lowercase* form only; the encoder produces
//! uppercase by adding Shift.  Shifted symbols (`'!'`, `'{'`, `'"'`, …)
//! carry the usage id of their base key plus the shift flag.  The
//! newline and tab characters map to the Enter and Tab keys so plain
//! text can be replayed keystroke by keystroke.

use super::{KeyStroke, Layout};

/// Complete printable-ASCII table for the US QWERTY arrangement.
const ENTRIES: &[(char, KeyStroke)] = &[
    // Letters (HID 0x04–0x1D)
    ('a', KeyStroke::plain(0x04)),
    ('b', KeyStroke::plain(0x05)),
    ('c', KeyStroke::plain(0x06)),
    ('d', KeyStroke::plain(0x07)),
    ('e', KeyStroke::plain(0x08)),
    ('f', KeyStroke::plain(0x09)),
    ('g', KeyStroke::plain(0x0A)),
    ('h', KeyStroke::plain(0x0B)),
    ('i', KeyStroke::plain(0x0C)),
    ('j', KeyStroke::plain(0x0D)),
    ('k', KeyStroke::plain(0x0E)),
    ('l', KeyStroke::plain(0x0F)),
    ('m', KeyStroke::plain(0x10)),
    ('n', KeyStroke::plain(0x11)),
    ('o', KeyStroke::plain(0x12)),
    ('p', KeyStroke::plain(0x13)),
    ('q', KeyStroke::plain(0x14)),
    ('r', KeyStroke::plain(0x15)),
    ('s', KeyStroke::plain(0x16)),
    ('t', KeyStroke::plain(0x17)),
    ('u', KeyStroke::plain(0x18)),
    ('v', KeyStroke::plain(0x19)),
    ('w', KeyStroke::plain(0x1A)),
    ('x', KeyStroke::plain(0x1B)),
    ('y', KeyStroke::plain(0x1C)),
    ('z', KeyStroke::plain(0x1D)),
    // Digit row (HID 0x1E–0x27)
    ('1', KeyStroke::plain(0x1E)),
    ('2', KeyStroke::plain(0x1F)),
    ('3', KeyStroke::plain(0x20)),
    ('4', KeyStroke::plain(0x21)),
    ('5', KeyStroke::plain(0x22)),
    ('6', KeyStroke::plain(0x23)),
    ('7', KeyStroke::plain(0x24)),
    ('8', KeyStroke::plain(0x25)),
    ('9', KeyStroke::plain(0x26)),
    ('0', KeyStroke::plain(0x27)),
    // Shifted digit row
    ('!', KeyStroke::shifted(0x1E)),
    ('@', KeyStroke::shifted(0x1F)),
    ('#', KeyStroke::shifted(0x20)),
    ('$', KeyStroke::shifted(0x21)),
    ('%', KeyStroke::shifted(0x22)),
    ('^', KeyStroke::shifted(0x23)),
    ('&', KeyStroke::shifted(0x24)),
    ('*', KeyStroke::shifted(0x25)),
    ('(', KeyStroke::shifted(0x26)),
    (')', KeyStroke::shifted(0x27)),
    // Whitespace (Enter, Tab, Space)
    ('\n', KeyStroke::plain(0x28)),
    ('\t', KeyStroke::plain(0x2B)),
    (' ', KeyStroke::plain(0x2C)),
    // Punctuation (HID 0x2D–0x38)
    ('-', KeyStroke::plain(0x2D)),
    ('_', KeyStroke::shifted(0x2D)),
    ('=', KeyStroke::plain(0x2E)),
    ('+', KeyStroke::shifted(0x2E)),
    ('[', KeyStroke::plain(0x2F)),
    ('{', KeyStroke::shifted(0x2F)),
    (']', KeyStroke::plain(0x30)),
    ('}', KeyStroke::shifted(0x30)),
    ('\\', KeyStroke::plain(0x31)),
    ('|', KeyStroke::shifted(0x31)),
    (';', KeyStroke::plain(0x33)),
    (':', KeyStroke::shifted(0x33)),
    ('\'', KeyStroke::plain(0x34)),
    ('"', KeyStroke::shifted(0x34)),
    ('`', KeyStroke::plain(0x35)),
    ('~', KeyStroke::shifted(0x35)),
    (',', KeyStroke::plain(0x36)),
    ('<', KeyStroke::shifted(0x36)),
    ('.', KeyStroke::plain(0x37)),
    ('>', KeyStroke::shifted(0x37)),
    ('/', KeyStroke::plain(0x38)),
    ('?', KeyStroke::shifted(0x38)),
];

/// Returns the built-in US QWERTY layout.
pub fn us_qwerty() -> Layout {
    Layout::new("us-qwerty", ENTRIES)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
