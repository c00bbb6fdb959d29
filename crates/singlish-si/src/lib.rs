//! Sinhala language module for Singlish-to-Sinhala transliteration.
//!
//! Turns romanized, code-mixed Sinhala text into Sinhala script. Each word
//! is classified first; only words that look like romanized Sinhala are
//! mapped, and every failure falls back to the original text.
//!
//! # Architecture
//!
//! - [`tokenizer`] -- Splits input into words, numerals, symbols, whitespace
//!   and newlines
//! - [`classifier`] -- Decides whether a word is Singlish, foreign or
//!   ambiguous
//! - [`mapper`] -- Phoneme mapping over the built-in rule index
//! - [`policy`] -- Fail-safe gating of classification and mapping
//! - [`reassembler`] -- Joins processed tokens back into one string
//! - [`config`] -- Engine configuration and validation
//! - [`handle`] -- `TransliteratorHandle`, the top-level entry point

pub mod classifier;
pub mod config;
pub mod handle;
pub mod mapper;
pub mod policy;
pub mod reassembler;
pub mod tokenizer;

pub use config::{ConfigError, EngineConfig};
pub use handle::{HandleError, TransliteratorHandle};
pub use policy::{ConversionReport, Disposition, TokenOutcome};
