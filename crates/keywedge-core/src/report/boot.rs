//! USB HID boot-keyboard input report wire types.
//!
//! Wire format:
//! ```text
//! [modifiers:1][reserved:1][usage slots:6]
//! ```
//! Total report size: 8 bytes, as defined by the USB HID specification
//! Appendix B.1 ("Boot Keyboard") and consumed unmodified by BIOS-class
//! hosts.
//!
//! # What is a boot keyboard report? (for beginners)
//!
//! A USB keyboard does not send characters to the host.  It sends a fixed
//! 8-byte snapshot of which keys are *currently held down*, called an
//! **input report**:
//!
//! | Byte | Content                                           |
//! |------|---------------------------------------------------|
//! | 0    | Modifier bit field (Ctrl/Shift/Alt/GUI, L and R)  |
//! | 1    | Reserved, always 0x00                             |
//! | 2–7  | Up to six key usage ids, unused slots 0x00        |
//!
//! The host translates usage ids into characters using its own layout
//! settings.  Sending `[0x00; 8]` means "all keys released".  The 6-slot
//! array is why this format is often called "6-key rollover": at most six
//! non-modifier keys can be reported at once.

use serde::{Deserialize, Serialize};

/// Total size of the boot-keyboard input report in bytes.
pub const REPORT_SIZE: usize = 8;

/// Number of usage-id slots in the short report (bytes 2–7).
pub const MAX_KEYS: usize = 6;

/// Modifier bit field, byte 0 of the report.
///
/// Bit assignment per USB HID Appendix B.1: one bit per modifier key,
/// left-hand modifiers in the low nibble, right-hand in the high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifierFlags(pub u8);

impl ModifierFlags {
    pub const LEFT_CTRL: u8 = 1 << 0;
    pub const LEFT_SHIFT: u8 = 1 << 1;
    pub const LEFT_ALT: u8 = 1 << 2;
    pub const LEFT_GUI: u8 = 1 << 3;
    pub const RIGHT_CTRL: u8 = 1 << 4;
    pub const RIGHT_SHIFT: u8 = 1 << 5;
    pub const RIGHT_ALT: u8 = 1 << 6;
    pub const RIGHT_GUI: u8 = 1 << 7;

    /// Both Shift bits together, the convention used when a character
    /// requires Shift (uppercase letters, shifted punctuation).
    pub const BOTH_SHIFT: u8 = Self::LEFT_SHIFT | Self::RIGHT_SHIFT;

    /// Sets the given modifier bits in addition to any already held.
    pub fn set(&mut self, bits: u8) {
        self.0 |= bits;
    }

    /// Returns `true` if either Ctrl modifier is active.
    pub fn ctrl(&self) -> bool {
        self.0 & (Self::LEFT_CTRL | Self::RIGHT_CTRL) != 0
    }

    /// Returns `true` if either Shift modifier is active.
    pub fn shift(&self) -> bool {
        self.0 & Self::BOTH_SHIFT != 0
    }

    /// Returns `true` if either Alt modifier is active.
    pub fn alt(&self) -> bool {
        self.0 & (Self::LEFT_ALT | Self::RIGHT_ALT) != 0
    }

    /// Returns `true` if either GUI (Win/Cmd/Super) modifier is active.
    pub fn gui(&self) -> bool {
        self.0 & (Self::LEFT_GUI | Self::RIGHT_GUI) != 0
    }
}

/// One boot-keyboard input report.
///
/// `Default` is the all-released report (`[0x00; 8]` on the wire).
/// The reserved byte is not stored; [`KeyboardReport::to_bytes`] inserts
/// it when producing the wire image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyboardReport {
    /// Modifier bit field (byte 0).
    pub modifiers: ModifierFlags,
    /// Usage-id slots (bytes 2–7), zero-filled when unused.
    pub keys: [u8; MAX_KEYS],
}

impl KeyboardReport {
    /// Produces the 8-byte wire image of this report.
    ///
    /// Byte 1 is the reserved byte and is always 0x00.
    pub fn to_bytes(&self) -> [u8; REPORT_SIZE] {
        [
            self.modifiers.0,
            0x00, // reserved
            self.keys[0],
            self.keys[1],
            self.keys[2],
            self.keys[3],
            self.keys[4],
            self.keys[5],
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
