//! Shared types for the Singlish-to-Sinhala transliteration workspace.
//!
//! - [`enums`] -- token kinds, classification labels, pass-through reasons
//! - [`token`] -- `Token`, `Classification`, `ConversionResult`
//! - [`character`] -- character classification and script utilities

pub mod character;
pub mod enums;
pub mod token;
