//! `wotd send <language>`: fetch, format, deliver and record today's word.

use crate::cli::{build_pipeline, output};
use crate::config::Config;
use crate::dispatch::ledger::FileLedger;
use crate::dispatch::Outcome;
use crate::model::Language;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Run the send command.
pub async fn run(
    language: &str,
    destination: Option<&str>,
    webhook: Option<&str>,
    ledger: Option<PathBuf>,
) -> Result<()> {
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(d) = destination {
        config.destination = d.parse()?;
    }
    if let Some(w) = webhook {
        config.webhook_url = Some(w.to_string());
    }
    if let Some(path) = ledger {
        config.ledger_path = path;
    }

    let language: Language = language.parse()?;
    let endpoint = config.require_webhook()?.to_string();
    let pipeline = build_pipeline(&config);
    let mut ledger = FileLedger::new(&config.ledger_path);

    let outcome = pipeline
        .run(&language, config.destination, &endpoint, &mut ledger)
        .await
        .with_context(|| format!("ledger unusable at {}", config.ledger_path.display()))?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "language": language.as_str(),
            "destination": config.destination.as_str(),
            "result": outcome,
        }));
    } else if !output::is_quiet() {
        match &outcome {
            Outcome::NoRecord => eprintln!("  No word of the day for {language} this run."),
            Outcome::Duplicate(key) => eprintln!("  {key:?} was already sent; nothing to do."),
            Outcome::Delivered(key) => eprintln!("  Sent {key:?} to {}.", config.destination),
            Outcome::DeliveryFailed(_) => {}
        }
    }

    if let Outcome::DeliveryFailed(key) = outcome {
        bail!("delivery failed; {key:?} stays eligible for the next run");
    }
    Ok(())
}
