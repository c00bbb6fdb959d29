// TransliteratorHandle: top-level integration point for Singlish conversion.
//
// Owns the classifier, the mapper and the fail-safe policy built from one
// validated configuration. All state is immutable after construction, so a
// handle can be shared between threads by reference.

use singlish_core::token::{Classification, ConversionResult, Token};
use tracing::{debug, debug_span};

use crate::classifier::ScriptClassifier;
use crate::config::{ConfigError, EngineConfig};
use crate::mapper::PhonemeMapper;
use crate::policy::{ConversionReport, FailSafePolicy};
use crate::reassembler::reassemble;
use crate::tokenizer;

/// Language code of the only supported target script.
pub const LANGUAGE: &str = "si";

/// Error type for TransliteratorHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Unsupported language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Top-level handle for converting Singlish text to Sinhala script.
#[derive(Debug, Clone)]
pub struct TransliteratorHandle {
    config: EngineConfig,
    policy: FailSafePolicy,
}

impl TransliteratorHandle {
    /// Create a handle for `language` (only `"si"` is supported).
    pub fn new(config: EngineConfig, language: &str) -> Result<Self, HandleError> {
        if language != LANGUAGE {
            return Err(HandleError::UnsupportedLanguage(language.to_string()));
        }
        config.validate()?;

        let classifier = ScriptClassifier::new(&config);
        Ok(Self {
            config,
            policy: FailSafePolicy::new(classifier, PhonemeMapper::new()),
        })
    }

    /// Create a Sinhala handle with the default configuration.
    pub fn with_defaults() -> Self {
        let config = EngineConfig::default();
        Self {
            policy: FailSafePolicy::new(ScriptClassifier::new(&config), PhonemeMapper::new()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Convert `text`. Never fails: anything that cannot be converted
    /// safely is emitted as written.
    pub fn convert(&self, text: &str) -> ConversionResult {
        self.convert_detailed(text).result
    }

    /// Convert `text` and keep the per-token decisions.
    pub fn convert_detailed(&self, text: &str) -> ConversionReport {
        let tokens = tokenizer::Tokens::new(text);
        let input_len = tokens.text_len();
        let limit = self.config.output_limit(input_len);

        let span = debug_span!("convert", input_len, limit);
        let _enter = span.enter();

        let outcomes = self.policy.apply(tokens.collect(), input_len, limit);
        let result = reassemble(&outcomes);
        debug!(passthrough = result.passthrough_count, "conversion finished");
        ConversionReport { outcomes, result }
    }

    /// Tokenize `text` without converting it.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenizer::tokenize(text)
    }

    /// Classify a single word.
    pub fn classify(&self, word: &str) -> Classification {
        self.policy.classifier().classify(word)
    }
}
