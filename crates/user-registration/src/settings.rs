//! Validation settings loaded via OrthoConfig.
//!
//! Settings stay stringly typed at the loading edge and are resolved into a
//! [`ValidationConfig`] in one place, so every source (environment, config
//! file, command line) goes through the same parsing rules.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::postal_code::{PostalCodeFormat, UnknownPostalCodeFormat};
use crate::record::{RecordShape, UnknownRecordShape};
use crate::user::ValidationConfig;

fn default_record_shape() -> String {
    RecordShape::default().to_string()
}

/// Raw settings controlling record validation.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct ValidationSettings {
    /// Record shape name: `name-username` or `first-last`.
    #[ortho_config(default = default_record_shape())]
    pub record_shape: Option<String>,
    /// Named postal code format: `five-digit` or `zip-plus-four`.
    pub postal_code_format: Option<String>,
    /// Custom postal code pattern; overrides `postal_code_format`.
    pub postal_code_pattern: Option<String>,
}

/// Errors raised while resolving [`ValidationSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The record shape name is not recognised.
    #[error(transparent)]
    RecordShape(#[from] UnknownRecordShape),
    /// The postal code format name is not recognised.
    #[error(transparent)]
    PostalCodeFormat(#[from] UnknownPostalCodeFormat),
    /// The custom postal code pattern does not compile.
    #[error("invalid postal code pattern '{pattern}': {message}")]
    PostalCodePattern {
        /// Pattern as supplied.
        pattern: String,
        /// Compiler diagnostic.
        message: String,
    },
}

impl ValidationSettings {
    /// Resolve the record shape, defaulting to [`RecordShape::NameUsername`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RecordShape`] for unknown names.
    pub fn record_shape(&self) -> Result<RecordShape, ConfigError> {
        match self.record_shape.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(RecordShape::default()),
        }
    }

    /// Resolve the postal code format, defaulting to
    /// [`PostalCodeFormat::FiveDigit`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PostalCodePattern`] for a pattern that does not
    /// compile and [`ConfigError::PostalCodeFormat`] for unknown names.
    pub fn postal_code_format(&self) -> Result<PostalCodeFormat, ConfigError> {
        if let Some(pattern) = self.postal_code_pattern.as_deref() {
            return PostalCodeFormat::pattern(pattern).map_err(|error| {
                ConfigError::PostalCodePattern {
                    pattern: pattern.to_owned(),
                    message: error.to_string(),
                }
            });
        }
        match self.postal_code_format.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(PostalCodeFormat::default()),
        }
    }

    /// Resolve every setting into a [`ValidationConfig`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    ///
    /// # Examples
    /// ```
    /// use user_registration::{RecordShape, ValidationSettings};
    ///
    /// let settings = ValidationSettings {
    ///     record_shape: Some("first-last".to_owned()),
    ///     ..ValidationSettings::default()
    /// };
    /// let config = settings.validation_config().expect("valid settings");
    /// assert_eq!(config.record_shape, RecordShape::FirstLast);
    /// ```
    pub fn validation_config(&self) -> Result<ValidationConfig, ConfigError> {
        Ok(ValidationConfig::new(
            self.record_shape()?,
            self.postal_code_format()?,
        ))
    }
}
