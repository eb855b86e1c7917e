//! Low-level text scanning for descent.
//!
//! Input text is held as UTF-16 code units, the storage the grammar engine
//! counts positions in. Characters above U+FFFF occupy two units (a
//! surrogate pair). This crate is the single authority translating between
//! units and code points:
//!
//! - [`to_unicode`] / [`from_unicode`] convert whole buffers
//! - [`code_point_at`] reads one code point at a position
//! - [`single_character_code_point`] validates one-character grammar terminals
//! - [`Cursor`] is the shared, rewindable scan position used during a parse
//!
//! Malformed text (an unpaired surrogate) is only ever detected here; every
//! other crate trusts what these functions return.

mod cursor;
mod error;
mod source_text;
mod unicode;

pub use cursor::{Cursor, Mark};
pub use error::DecodeError;
pub use source_text::SourceText;
pub use unicode::{
    code_point_at, encode, from_unicode, single_character, single_character_code_point,
    to_text, to_unicode,
};
