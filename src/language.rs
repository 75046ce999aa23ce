//! Language type: the closed set of languages the catalog ships.
//!
//! `Language` is an enum rather than a free-form code so that every lookup
//! into the catalog is total: a `Language` value always has a fully
//! populated catalog entry, and adding a variant forces every exhaustive
//! match in the crate to be updated.

use crate::registry::{LanguageConfig, LanguageRegistry, ENGLISH_CONFIG, NORWEGIAN_CONFIG};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error constructing a [`Language`] from external input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The code does not name any supported language.
    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),

    /// The language exists in the registry but is not enabled.
    #[error("language '{0}' is not enabled")]
    LanguageDisabled(String),
}

/// A language the catalog ships strings for.
///
/// Serializes as its ISO 639-1 code ("en", "no"), which is the form
/// consumers persist as the user's language preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English (canonical language)
    #[serde(rename = "en")]
    English,

    /// Norwegian (Bokmål)
    #[serde(rename = "no")]
    Norwegian,
}

impl Language {
    /// All supported languages, in registry order.
    pub const ALL: [Language; 2] = [Language::English, Language::Norwegian];

    /// Create a Language from a language code string.
    ///
    /// This is the boundary constructor for external input (a persisted
    /// preference, a query parameter, an environment variable). It validates
    /// the code against the registry.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err(I18nError)` if the code is not found or the language is disabled
    ///
    /// # Example
    /// ```
    /// use cardcrunch_i18n::Language;
    ///
    /// let norwegian = Language::from_code("no").unwrap();
    /// assert_eq!(norwegian, Language::Norwegian);
    /// assert!(Language::from_code("sv").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Language::ALL
                .into_iter()
                .find(|lang| lang.code() == config.code)
                .ok_or_else(|| I18nError::UnknownLanguage(code.to_string())),
            Some(_) => Err(I18nError::LanguageDisabled(code.to_string())),
            None => Err(I18nError::UnknownLanguage(code.to_string())),
        }
    }

    /// Get the canonical (source) language.
    ///
    /// This is the language the strings are originally authored in, and from
    /// which all translations are derived.
    pub fn canonical() -> Language {
        Language::English
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// Get the full language configuration from the registry.
    ///
    /// Resolved by exhaustive match, so every variant is guaranteed a config.
    pub fn config(&self) -> &'static LanguageConfig {
        match self {
            Language::English => &ENGLISH_CONFIG,
            Language::Norwegian => &NORWEGIAN_CONFIG,
        }
    }

    /// Get the English name of the language (e.g., "Norwegian").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Norsk").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
