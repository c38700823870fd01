//! Encoder turning an ordered key list into a boot-keyboard report.
//!
//! The encoder is a single-pass, stateless transform: modifier keys are
//! folded into byte 0, everything else fills the usage slots in order.
//! Uppercase ASCII letters are encoded as their lowercase key plus both
//! Shift modifiers, matching how a physical typist produces them; layout
//! entries flagged as shifted (e.g. `'!'` on US QWERTY) get the same
//! treatment.

use thiserror::Error;

use crate::layout::{self, Layout};
use crate::report::boot::{KeyboardReport, ModifierFlags, MAX_KEYS};
use crate::report::keys::KeyInput;

/// Errors that can occur while encoding a key list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A literal character has no mapping in the selected layout.
    #[error("no mapping for character {0:?} in the selected layout")]
    UnmappedCharacter(char),

    /// The key list was empty; a report encodes between 1 and 6 keys.
    #[error("key list is empty")]
    EmptyInput,

    /// No layout has been selected; call [`layout::set_layout`] first.
    #[error("no active layout selected")]
    NoActiveLayout,
}

/// Encodes `keys` into a boot-keyboard report using `layout` to resolve
/// literal characters.
///
/// Keys are processed in order.  Modifier keys set their bit in the
/// modifier byte and occupy no usage slot; all other keys fill the six
/// usage slots from byte 2 onward.  At most [`MAX_KEYS`] items are
/// encoded; anything beyond the sixth is ignored, per the short-report
/// ceiling, so the 8-byte image can never be overrun.
///
/// # Errors
///
/// Returns [`EncodeError::EmptyInput`] if `keys` is empty, or
/// [`EncodeError::UnmappedCharacter`] if any character has no entry in
/// `layout`.  On error no report is produced.
///
/// # Examples
///
/// ```rust
/// use keywedge_core::{encode_report, keys, layout, ControlKey};
///
/// let layout = layout::us_qwerty();
///
/// // GUI + r, the "open run dialog" combo.
/// let report = encode_report(&layout, &keys![ControlKey::LeftGui, 'r']).unwrap();
/// assert_eq!(report.to_bytes(), [0x08, 0x00, 0x15, 0, 0, 0, 0, 0]);
/// ```
pub fn encode_report(layout: &Layout, keys: &[KeyInput]) -> Result<KeyboardReport, EncodeError> {
    if keys.is_empty() {
        return Err(EncodeError::EmptyInput);
    }

    let mut report = KeyboardReport::default();
    let mut slot = 0;

    for key in keys.iter().take(MAX_KEYS) {
        match *key {
            KeyInput::Control(control) => match control.modifier_bit() {
                Some(bit) => report.modifiers.set(bit),
                None => slot = fill_slot(&mut report, slot, control.usage_id()),
            },
            KeyInput::Char(c) => {
                // Uppercase letters are typed as Shift + lowercase key;
                // the layout stores only the base form.
                let (base, upper) = if c.is_ascii_uppercase() {
                    (c.to_ascii_lowercase(), true)
                } else {
                    (c, false)
                };
                let stroke = layout
                    .lookup(base)
                    .ok_or(EncodeError::UnmappedCharacter(c))?;
                if upper || stroke.shift {
                    report.modifiers.set(ModifierFlags::BOTH_SHIFT);
                }
                slot = fill_slot(&mut report, slot, stroke.usage);
            }
        }
    }

    Ok(report)
}

/// Encodes `keys` against the process-wide active layout.
///
/// Same semantics as [`encode_report`]; the layout comes from the
/// registry populated by [`layout::set_layout`].
///
/// # Errors
///
/// Returns [`EncodeError::NoActiveLayout`] if no layout has been
/// selected, otherwise as [`encode_report`].
pub fn encode_with_active_layout(keys: &[KeyInput]) -> Result<KeyboardReport, EncodeError> {
    let layout = layout::active_layout().ok_or(EncodeError::NoActiveLayout)?;
    encode_report(&layout, keys)
}

/// Writes `usage` into the next free slot and returns the new slot index.
///
/// With at most [`MAX_KEYS`] items per call and one slot per item the
/// index cannot pass the array end; the guard keeps the write in bounds
/// even so.
fn fill_slot(report: &mut KeyboardReport, slot: usize, usage: u8) -> usize {
    if slot < report.keys.len() {
        report.keys[slot] = usage;
        slot + 1
    } else {
        slot
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
