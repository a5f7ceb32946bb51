#![warn(rust_2018_idioms)]

//! Repositioning of Thai vowel and tone marks for fonts that provide Private Use Area glyph
//! variants (U+F700..=U+F71F) instead of OpenType mark positioning.

pub mod error;
pub mod preprocess;
/// Forward-only character sources with one character of pushback.
pub mod source;
pub mod thai;

pub use crate::error::{DecodeError, ParseError};
pub use crate::preprocess::{
    preprocess_chars, preprocess_encoded, preprocess_source, preprocess_str, preprocess_utf16be,
    preprocess_utf16le, preprocess_utf8, ThaiPreprocessor,
};
pub use crate::thai::HistoryMode;
