//! Report module containing the boot-keyboard wire types, the key input
//! model, and the report encoder.

pub mod boot;
pub mod keys;
pub mod encoder;

pub use boot::{KeyboardReport, ModifierFlags, MAX_KEYS, REPORT_SIZE};
pub use encoder::{encode_report, encode_with_active_layout, EncodeError};
pub use keys::{ControlKey, KeyInput};
