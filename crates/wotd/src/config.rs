//! Runtime configuration resolved from `WOTD_*` environment variables.

use crate::error::{Result, WotdError};
use crate::format::Destination;
use std::path::PathBuf;

/// Default document fetch deadline.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Default bound on waiting for widget content to render.
pub const DEFAULT_RENDER_TIMEOUT_MS: u64 = 20_000;

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Flat file of previously sent dedup keys.
    pub ledger_path: PathBuf,
    /// Webhook endpoint; required only when sending.
    pub webhook_url: Option<String>,
    pub destination: Destination,
    pub fetch_timeout_ms: u64,
    pub render_timeout_ms: u64,
    /// Explicit browser binary, overriding discovery.
    pub chromium_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let ledger_path = lookup("WOTD_LEDGER_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_ledger_path);

        let webhook_url = lookup("WOTD_WEBHOOK_URL").filter(|v| !v.trim().is_empty());

        let destination = match lookup("WOTD_DESTINATION") {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => Destination::Discord,
        };

        let fetch_timeout_ms = lookup("WOTD_FETCH_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_MS);

        let render_timeout_ms = lookup("WOTD_RENDER_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_RENDER_TIMEOUT_MS);

        let chromium_path = lookup("WOTD_CHROMIUM_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            ledger_path,
            webhook_url,
            destination,
            fetch_timeout_ms,
            render_timeout_ms,
            chromium_path,
        })
    }

    /// The webhook endpoint, or a configuration error naming the variable.
    pub fn require_webhook(&self) -> Result<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| WotdError::Config("no webhook URL (set WOTD_WEBHOOK_URL or pass --webhook)".into()))
    }
}

/// `~/.wotd`, falling back to `/tmp/.wotd` without a home directory.
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".wotd")
}

fn default_ledger_path() -> PathBuf {
    data_dir().join("sent_words.txt")
}
