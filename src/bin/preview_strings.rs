//! Preview strings binary - dumps a language's catalog entry for translator review
//!
//! Usage:
//!   cargo run --bin preview                          # English, text output
//!   CARDCRUNCH_LANG=no cargo run --bin preview       # Norwegian
//!   CARDCRUNCH_OUTPUT=json cargo run --bin preview   # JSON dump
//!
//! Optional environment variables:
//! - CARDCRUNCH_LANG (defaults to "en")
//! - CARDCRUNCH_OUTPUT ("text" or "json", defaults to "text")
//!
//! The catalog is validated before printing; completeness errors abort the
//! run, translator warnings are logged.

use anyhow::{bail, Result};
use cardcrunch_i18n::config::{Config, OutputFormat};
use cardcrunch_i18n::{get_translations, CatalogMetrics, CatalogValidator, MathOperator};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cardcrunch_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Previewing catalog entry for {} ({})",
        config.language.name(),
        config.language.code()
    );

    // Validate the whole catalog before showing anything
    let report = CatalogValidator::validate_catalog();
    for warning in &report.warnings {
        warn!("catalog: {}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            warn!("catalog: {}", error);
        }
        bail!("catalog validation failed with {} error(s)", report.errors.len());
    }

    let metrics = CatalogMetrics::global();
    metrics.record_lookup(config.language);
    let strings = get_translations(config.language);

    // Sample renders so translators see the templates filled in
    let samples = [
        ("damage_question(30)", strings.damage_question(30)),
        (
            "math_question(3, 4, +)",
            strings.math_question(3, 4, MathOperator::Add),
        ),
        (
            "math_question(10, 7, -)",
            strings.math_question(10, 7, MathOperator::Subtract),
        ),
    ];
    metrics.record_damage_render();
    metrics.record_math_render();
    metrics.record_math_render();

    match config.output {
        OutputFormat::Text => {
            println!(
                "=== {} ({}) / native: {} ===",
                config.language.name(),
                config.language.code(),
                config.language.native_name()
            );
            for (name, value) in strings.fields() {
                println!("{:<26} {}", name, value);
            }
            println!();
            println!("--- Sample renders ---");
            for (label, rendered) in &samples {
                println!("{:<26} {}", label, rendered);
            }
        }
        OutputFormat::Json => {
            let fields: serde_json::Map<String, serde_json::Value> = strings
                .fields()
                .into_iter()
                .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
                .collect();
            let samples: serde_json::Map<String, serde_json::Value> = samples
                .iter()
                .map(|(label, rendered)| {
                    (label.to_string(), serde_json::Value::from(rendered.as_str()))
                })
                .collect();
            let dump = serde_json::json!({
                "language": config.language,
                "native_name": config.language.native_name(),
                "fields": fields,
                "samples": samples,
            });
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }

    info!(
        "Preview done: {}",
        serde_json::to_string(&metrics.report())?
    );
    Ok(())
}
