//! Async HTTP client wrapping reqwest.
//!
//! Not a browser, just HTTP requests. Handles redirects and a fixed
//! per-request deadline. Never retries: a failed request is reported once.

use crate::error::{Result, WotdError};
use serde::Serialize;
use std::time::Duration;

/// Response from an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client shared by the static-page adapter and the webhook transport.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with a standard Chrome user-agent.
    pub fn new(timeout_ms: u64) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";
        let timeout = Duration::from_millis(timeout_ms);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client, timeout }
    }

    /// GET a document, treating any non-2xx status as an error.
    pub async fn get_document(&self, url: &str) -> Result<HttpResponse> {
        let r = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| WotdError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let resp = read_response(url, r).await?;
        if !resp.is_success() {
            return Err(WotdError::Status {
                url: url.to_string(),
                status: resp.status,
            });
        }
        Ok(resp)
    }

    /// POST a JSON body and return the response whatever its status.
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<HttpResponse> {
        let r = self
            .client
            .post(url)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|source| WotdError::Fetch {
                url: url.to_string(),
                source,
            })?;

        read_response(url, r).await
    }
}

async fn read_response(url: &str, r: reqwest::Response) -> Result<HttpResponse> {
    let status = r.status().as_u16();
    let final_url = r.url().to_string();
    let body = r.text().await.map_err(|source| WotdError::Fetch {
        url: url.to_string(),
        source,
    })?;

    Ok(HttpResponse {
        final_url,
        status,
        body,
    })
}
