//! # keywedge-core
//!
//! Core library for keywedge: encodes logical key presses into 8-byte
//! USB HID boot-keyboard input reports, and provides the character →
//! usage-id layout tables the encoding consults.
//!
//! This crate is pure computation.  It has zero dependencies on OS APIs
//! or USB transports; the firmware that owns the HID endpoint takes the
//! bytes from [`KeyboardReport::to_bytes`] and ships them.
//!
//! The crate defines:
//!
//! - **`layout`** – The [`Layout`] value type (which key, shifted or
//!   not, produces a character), the built-in US QWERTY table, and the
//!   configure-once process-wide layout registry.
//!
//! - **`report`** – The boot-keyboard wire types ([`KeyboardReport`],
//!   [`ModifierFlags`]), the [`KeyInput`]/[`ControlKey`] input model,
//!   and [`encode_report`], the single-pass encoder.
//!
//! Typical use:
//!
//! ```rust
//! use keywedge_core::{encode_report, keys, layout, ControlKey};
//!
//! let layout = layout::us_qwerty();
//! let report = encode_report(&layout, &keys![ControlKey::LeftGui, 'r'])?;
//! // Hand the 8 bytes to the USB transport.
//! let _wire: [u8; 8] = report.to_bytes();
//! # Ok::<(), keywedge_core::EncodeError>(())
//! ```

pub mod layout;
pub mod report;

// Re-export the most-used types at the crate root so callers can write
// `keywedge_core::KeyboardReport` instead of the full module path.
pub use layout::{active_layout, set_layout, KeyStroke, Layout};
pub use report::boot::{KeyboardReport, ModifierFlags, MAX_KEYS, REPORT_SIZE};
pub use report::encoder::{encode_report, encode_with_active_layout, EncodeError};
pub use report::keys::{ControlKey, KeyInput};
