//! Environment readiness check.

use crate::acquisition::static_page::builtin_static_pages;
use crate::config::Config;
use crate::dispatch::ledger::FileLedger;
use crate::renderer::chromium::find_chromium;
use anyhow::{Context, Result};

/// Check Chromium availability, ledger path, and webhook configuration.
pub async fn run() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    println!("wotd doctor");
    println!("===========");
    println!();
    println!("OS:   {}", std::env::consts::OS);
    println!("Arch: {}", std::env::consts::ARCH);
    println!();

    // Browser, needed only for widget languages
    let chromium = find_chromium(config.chromium_path.as_deref());
    match &chromium {
        Some(path) => println!("[OK] Chromium found: {}", path.display()),
        None => println!(
            "[!!] Chromium NOT found. Widget languages will not work; set WOTD_CHROMIUM_PATH."
        ),
    }

    // Ledger
    let ledger = FileLedger::new(&config.ledger_path);
    match ledger.keys() {
        Ok(keys) => println!(
            "[OK] Ledger {} ({} word(s) sent)",
            ledger.path().display(),
            keys.len()
        ),
        Err(e) => println!("[!!] Ledger unreadable: {e}"),
    }

    // Destination
    match &config.webhook_url {
        Some(_) => println!("[OK] Webhook configured ({})", config.destination),
        None => println!("[!!] No webhook. Set WOTD_WEBHOOK_URL or pass --webhook to `wotd send`."),
    }
    println!(
        "[OK] Timeouts: fetch {}ms, render {}ms",
        config.fetch_timeout_ms, config.render_timeout_ms
    );

    let pages = builtin_static_pages();
    let static_languages: Vec<&str> = pages
        .iter()
        .map(|c| c.language.as_str())
        .collect();
    println!();
    println!("Static-page languages: {}", static_languages.join(", "));

    println!();
    if chromium.is_some() && config.webhook_url.is_some() {
        println!("Status: READY");
    } else if config.webhook_url.is_some() {
        println!("Status: READY (static-page languages only)");
    } else {
        println!("Status: NOT READY");
    }
    Ok(())
}
