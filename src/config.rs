//! Environment configuration for the preview binary.

use crate::language::Language;
use anyhow::{bail, Context, Result};

/// Output format for the catalog preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Language whose catalog entry is previewed
    pub language: Language,

    /// Preview output format
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `CARDCRUNCH_LANG`: language code, defaults to "en". An invalid code
    ///   is an error, not a fallback.
    /// - `CARDCRUNCH_OUTPUT`: "text" or "json", defaults to "text".
    pub fn from_env() -> Result<Self> {
        let lang_code = std::env::var("CARDCRUNCH_LANG").unwrap_or_else(|_| "en".to_string());
        let language = Language::from_code(&lang_code)
            .with_context(|| format!("CARDCRUNCH_LANG is set to '{}'", lang_code))?;

        let output = match std::env::var("CARDCRUNCH_OUTPUT")
            .unwrap_or_else(|_| "text".to_string())
            .as_str()
        {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => bail!("CARDCRUNCH_OUTPUT must be 'text' or 'json', got '{}'", other),
        };

        Ok(Self { language, output })
    }
}
