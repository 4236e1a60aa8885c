//! `wotd preview <language>`: show the payload without sending it.

use crate::cli::{build_pipeline, output};
use crate::config::Config;
use crate::model::Language;
use anyhow::{Context, Result};

/// Run the preview command.
pub async fn run(language: &str, destination: Option<&str>) -> Result<()> {
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(d) = destination {
        config.destination = d.parse()?;
    }
    let language: Language = language.parse()?;
    let pipeline = build_pipeline(&config);

    let Some((word, payload)) = pipeline.preview(&language, config.destination).await else {
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "error": "no_record",
                "message": format!("No word of the day for '{language}'"),
            }));
        } else if !output::is_quiet() {
            eprintln!("  No word of the day for {language} this run.");
        }
        return Ok(());
    };

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "dedup_key": word.dedup_key(),
            "word": word,
            "payload": payload,
        }));
    } else {
        if !output::is_quiet() {
            eprintln!(
                "  {} ({}), dedup key {:?}",
                word.headword(),
                language,
                word.dedup_key()
            );
        }
        output::print_json(&serde_json::to_value(&payload)?);
    }
    Ok(())
}
