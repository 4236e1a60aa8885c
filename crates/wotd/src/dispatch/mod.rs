//! Dispatch orchestrator: acquire, dedup, format, deliver, record.
//!
//! The ledger is written only after the transport confirms delivery, so a
//! failed post leaves the word eligible for the next run.

pub mod ledger;
pub mod transport;

use crate::acquisition::http_client::HttpClient;
use crate::acquisition::Sources;
use crate::error::Result;
use crate::format::{self, Destination, Payload};
use crate::model::{Language, WordOfDay};
use crate::renderer::Renderer;
use ledger::Ledger;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use transport::Transport;

/// How one run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "key", rename_all = "snake_case")]
pub enum Outcome {
    /// Acquisition produced nothing; see the logs for why.
    NoRecord,
    /// The word was delivered on an earlier run.
    Duplicate(String),
    /// Delivered and recorded.
    Delivered(String),
    /// Transport failed; the ledger was left untouched.
    DeliveryFailed(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::DeliveryFailed(_))
    }
}

/// Everything a run needs besides the ledger.
pub struct Pipeline {
    pub sources: Sources,
    pub client: HttpClient,
    pub renderer: Arc<dyn Renderer>,
    pub transport: Arc<dyn Transport>,
}

impl Pipeline {
    /// Acquire today's word, logging any failure as "no record".
    pub async fn acquire(&self, language: &Language) -> Option<WordOfDay> {
        match self
            .sources
            .acquire(&self.client, self.renderer.as_ref(), language)
            .await
        {
            Ok(Some(word)) => {
                info!("acquired {language} word {:?}", word.headword());
                Some(word)
            }
            Ok(None) => {
                warn!("no word of the day rendered for {language}");
                None
            }
            Err(e) if e.is_acquisition_failure() => {
                warn!("failed to acquire word of the day for {language}: {e}");
                None
            }
            Err(e) => {
                error!("word of the day source for {language} is misconfigured: {e}");
                None
            }
        }
    }

    /// Acquire and format without delivering.
    pub async fn preview(&self, language: &Language, destination: Destination) -> Option<(WordOfDay, Payload)> {
        let word = self.acquire(language).await?;
        let payload = format::build_payload(&word, destination);
        Some((word, payload))
    }

    /// Run the full pipeline once for `language`.
    ///
    /// Only ledger I/O errors propagate; every other failure is logged and
    /// reported through the returned [`Outcome`].
    pub async fn run(
        &self,
        language: &Language,
        destination: Destination,
        endpoint: &str,
        ledger: &mut dyn Ledger,
    ) -> Result<Outcome> {
        let Some(word) = self.acquire(language).await else {
            return Ok(Outcome::NoRecord);
        };

        let key = word.dedup_key().to_string();
        if ledger.contains(&key)? {
            info!("{language} word {key:?} was already sent, skipping");
            return Ok(Outcome::Duplicate(key));
        }

        let payload = format::build_payload(&word, destination);
        if let Err(e) = self.transport.deliver(&payload, endpoint).await {
            warn!("delivery of {language} word {key:?} to {destination} failed: {e}");
            return Ok(Outcome::DeliveryFailed(key));
        }

        ledger.append(&key)?;
        info!("delivered {language} word {key:?} to {destination}");
        Ok(Outcome::Delivered(key))
    }
}
