//! Catalog completeness validation.
//!
//! The struct type already guarantees that no language entry omits a field;
//! this module checks the properties the type system cannot see: fields left
//! empty, formatter templates whose placeholders drifted from the canonical
//! language, and translations that look like they were never translated.
//!
//! Run at startup (the preview binary does) so a broken catalog entry is a
//! load-time report, not a render-time surprise.

use crate::language::Language;
use crate::strings::get_translations;
use regex::Regex;
use std::sync::OnceLock;

/// Fields that are intentionally identical in every language (product brand).
const SHARED_BRAND_FIELDS: &[&str] = &["app_title", "app_tagline"];

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical defects: the catalog would render wrong or empty text
    pub errors: Vec<String>,

    /// Non-critical findings worth a translator's review
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness and formatter contract parity.
pub struct CatalogValidator;

// Placeholder pattern (cached for repeated validation runs)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate the entire shipped catalog.
    ///
    /// Checks, for every language:
    /// - no field is empty
    /// - every formatter template carries exactly the placeholders the
    ///   canonical language's template carries
    /// - plain fields do not contain stray `{placeholder}` slots
    /// - non-canonical strings are not byte-identical to the canonical
    ///   string (warning only; brand fields are exempt)
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate_catalog() -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = get_translations(Language::canonical());

        for lang in Language::ALL {
            let strings = get_translations(lang);

            for ((name, value), (_, canonical_value)) in
                strings.fields().into_iter().zip(canonical.fields())
            {
                if value.is_empty() {
                    report
                        .errors
                        .push(format!("[{}] field '{}' is empty", lang.code(), name));
                    continue;
                }

                let is_template = name.ends_with("_template");
                if is_template {
                    let expected = Self::extract_placeholders(canonical_value);
                    let actual = Self::extract_placeholders(value);
                    if expected != actual {
                        report.errors.push(format!(
                            "[{}] template '{}' placeholder mismatch: expected {:?}, found {:?}",
                            lang.code(),
                            name,
                            expected,
                            actual
                        ));
                    }
                } else if !Self::extract_placeholders(value).is_empty() {
                    report.errors.push(format!(
                        "[{}] plain field '{}' contains placeholder slots",
                        lang.code(),
                        name
                    ));
                }

                if lang != Language::canonical()
                    && value == canonical_value
                    && !SHARED_BRAND_FIELDS.contains(&name)
                {
                    report.warnings.push(format!(
                        "[{}] field '{}' is identical to the canonical string (untranslated?)",
                        lang.code(),
                        name
                    ));
                }
            }
        }

        report
    }

    /// Extract all `{placeholder}` names from text, sorted and deduplicated.
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z][a-z0-9_]*)\}").unwrap());

        let mut names: Vec<String> = regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let text = "Your Pokémon deals {damage} damage each turn.";
        let placeholders = CatalogValidator::extract_placeholders(text);
        assert_eq!(placeholders, vec!["damage"]);
    }

    #[test]
    fn test_extract_placeholders_multiple_sorted() {
        let text = "What is {num1} {operator} {num2}?";
        let placeholders = CatalogValidator::extract_placeholders(text);
        assert_eq!(placeholders, vec!["num1", "num2", "operator"]);
    }

    #[test]
    fn test_extract_placeholders_deduplicated() {
        let text = "{damage} and {damage} again";
        let placeholders = CatalogValidator::extract_placeholders(text);
        assert_eq!(placeholders, vec!["damage"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        let placeholders = CatalogValidator::extract_placeholders("No slots here");
        assert!(placeholders.is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_non_placeholder_braces() {
        // Set braces in prose are not placeholder slots
        let placeholders = CatalogValidator::extract_placeholders("{1, 2, 3} and {X}");
        assert!(placeholders.is_empty());
    }

    // ==================== Catalog Validation Tests ====================

    #[test]
    fn test_shipped_catalog_is_clean() {
        let report = CatalogValidator::validate_catalog();
        assert!(
            report.is_clean(),
            "errors: {:?}, warnings: {:?}",
            report.errors,
            report.warnings
        );
    }

    #[test]
    fn test_shipped_templates_agree_with_canonical() {
        let en = CatalogValidator::extract_placeholders(
            crate::strings::ENGLISH_STRINGS.math_question_template,
        );
        let no = CatalogValidator::extract_placeholders(
            crate::strings::NORWEGIAN_STRINGS.math_question_template,
        );
        assert_eq!(en, no);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
