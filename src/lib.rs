//! Localization catalog for the cardCrun.ch trivia card app.
//!
//! This crate holds every user-facing string of the application, in every
//! supported language, as static data. UI components select a language and
//! read fully populated records from the catalog; there is no runtime
//! fallback and no partial record.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language enum covering exactly the catalog's languages
//! - `strings`: The string schema and the per-language catalog entries
//! - `validator`: Catalog completeness validation
//! - `metrics`: Catalog lookup observability and metrics
//!
//! # Example
//!
//! ```rust
//! use cardcrunch_i18n::{get_translations, Language, MathOperator};
//!
//! let t = get_translations(Language::English);
//! assert_eq!(t.correct, "Correct!");
//! assert_eq!(t.math_question(3, 4, MathOperator::Add), "What is 3 + 4?");
//!
//! // External input (persisted preference, query param) goes through from_code
//! let norwegian = Language::from_code("no").unwrap();
//! assert_eq!(get_translations(norwegian).cancel, "Avbryt");
//! ```

pub mod config;
mod language;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use language::{I18nError, Language};
pub use metrics::{CatalogMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{get_translations, LanguageStrings, MathOperator};
pub use validator::{CatalogValidator, ValidationReport};
