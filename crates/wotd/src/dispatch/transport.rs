//! Outbound delivery of formatted payloads.

use crate::acquisition::http_client::HttpClient;
use crate::error::{Result, WotdError};
use crate::format::Payload;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Longest response excerpt kept in a delivery error.
const MAX_ERROR_BODY: usize = 200;

/// Something that can post a payload to an endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver `payload`; any non-success is an error.
    async fn deliver(&self, payload: &Payload, endpoint: &str) -> Result<()>;
}

/// Posts payloads as JSON to a chat webhook.
#[derive(Clone)]
pub struct WebhookTransport {
    client: HttpClient,
}

impl WebhookTransport {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for WebhookTransport {
    async fn deliver(&self, payload: &Payload, endpoint: &str) -> Result<()> {
        let resp = self
            .client
            .post_json(endpoint, payload)
            .await
            .map_err(|e| WotdError::Delivery {
                endpoint: redact_endpoint(endpoint),
                reason: match e {
                    WotdError::Fetch { source, .. } => source.without_url().to_string(),
                    other => other.to_string(),
                },
            })?;

        if !resp.is_success() {
            let excerpt: String = resp.body.chars().take(MAX_ERROR_BODY).collect();
            return Err(WotdError::Delivery {
                endpoint: redact_endpoint(endpoint),
                reason: format!("status {}: {}", resp.status, excerpt.trim()),
            });
        }
        debug!("webhook accepted payload with status {}", resp.status);
        Ok(())
    }
}

/// Scheme, host and port of a webhook URL.
///
/// Chat webhooks carry their secret token in the path, so only the origin
/// may appear in errors and logs.
pub fn redact_endpoint(endpoint: &str) -> String {
    match Url::parse(endpoint) {
        Ok(url) if url.has_host() => url.origin().ascii_serialization(),
        _ => "<unparseable endpoint>".to_string(),
    }
}
