//! Engine configuration loaded from TOML.
//!
//! Every key is optional; missing keys take the values in
//! `default_config.toml`. Validation runs once, when a handle is built.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("confidence_threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f32),
    #[error("max_output_expansion_factor must be finite and at least 1, got {0}")]
    InvalidExpansionFactor(f32),
    #[error("min_candidate_length ({min}) exceeds max_candidate_length ({max})")]
    InvalidLengthBounds { min: usize, max: usize },
}

/// Tunable engine parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// A word is transliterated only if its plausibility is strictly above
    /// this value.
    pub confidence_threshold: f32,
    /// Bound on output length relative to input length, in characters.
    pub max_output_expansion_factor: f32,
    /// Words always kept as written, in addition to the built-in list.
    pub foreign_word_allow_list: BTreeSet<String>,
    pub min_candidate_length: usize,
    pub max_candidate_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.6,
            max_output_expansion_factor: 2.0,
            foreign_word_allow_list: BTreeSet::new(),
            min_candidate_length: 3,
            max_candidate_length: 14,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::InvalidThreshold(self.confidence_threshold));
        }
        let factor = self.max_output_expansion_factor;
        if !factor.is_finite() || factor < 1.0 {
            return Err(ConfigError::InvalidExpansionFactor(factor));
        }
        if self.min_candidate_length > self.max_candidate_length {
            return Err(ConfigError::InvalidLengthBounds {
                min: self.min_candidate_length,
                max: self.max_candidate_length,
            });
        }
        Ok(())
    }

    /// Largest output length allowed for an input of `input_len` characters.
    pub fn output_limit(&self, input_len: usize) -> usize {
        (f64::from(self.max_output_expansion_factor) * input_len as f64).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toml_matches_default() {
        let parsed = EngineConfig::from_toml_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, EngineConfig::default());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            EngineConfig::from_toml_str("").unwrap(),
            EngineConfig::default()
        );
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = EngineConfig::from_toml_str(
            "confidence_threshold = 0.8\nforeign_word_allow_list = [\"Kamala\", \"sepala\"]\n",
        )
        .unwrap();
        assert_eq!(config.confidence_threshold, 0.8);
        assert_eq!(config.foreign_word_allow_list.len(), 2);
        assert_eq!(config.max_output_expansion_factor, 2.0);
        assert_eq!(config.max_candidate_length, 14);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = EngineConfig::from_toml_str("treshold = 0.5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn threshold_out_of_range() {
        for value in ["1.5", "-0.1", "nan"] {
            let toml = format!("confidence_threshold = {value}");
            let err = EngineConfig::from_toml_str(&toml).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold(_)), "{value}");
        }
    }

    #[test]
    fn threshold_bounds_inclusive() {
        assert!(EngineConfig::from_toml_str("confidence_threshold = 0.0").is_ok());
        assert!(EngineConfig::from_toml_str("confidence_threshold = 1.0").is_ok());
    }

    #[test]
    fn expansion_factor_below_one() {
        let err = EngineConfig::from_toml_str("max_output_expansion_factor = 0.5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidExpansionFactor(_)));
        let err = EngineConfig::from_toml_str("max_output_expansion_factor = inf").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidExpansionFactor(_)));
    }

    #[test]
    fn inverted_length_bounds() {
        let err = EngineConfig::from_toml_str("min_candidate_length = 9\nmax_candidate_length = 4")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidLengthBounds { min: 9, max: 4 }
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EngineConfig::from_path(Path::new("/nonexistent/singlish.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/singlish.toml"));
    }

    #[test]
    fn output_limit_floors() {
        let config = EngineConfig {
            max_output_expansion_factor: 1.5,
            ..EngineConfig::default()
        };
        assert_eq!(config.output_limit(3), 4);
        assert_eq!(config.output_limit(0), 0);
        assert_eq!(EngineConfig::default().output_limit(7), 14);
    }
}
