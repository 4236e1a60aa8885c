//! Error types for the acquisition, parsing and delivery pipeline.

/// All errors that can occur while producing or delivering a word of the day.
#[derive(thiserror::Error, Debug)]
pub enum WotdError {
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("timed out after {timeout_ms}ms waiting for `{selector}` on {url}")]
    RenderTimeout {
        url: String,
        selector: String,
        timeout_ms: u64,
    },

    #[error("render error: {0}")]
    Render(String),

    #[error("parse error: {0}")]
    Parse(String),

    /// `endpoint` holds only the webhook's origin; the path carries its secret.
    #[error("delivery to {endpoint} failed: {reason}")]
    Delivery { endpoint: String, reason: String },

    #[error("ledger error at {path}: {source}")]
    Ledger {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl WotdError {
    /// Whether this error means "nothing to send this run" rather than a
    /// broken environment.
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. }
                | Self::Status { .. }
                | Self::RenderTimeout { .. }
                | Self::Render(_)
                | Self::Parse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WotdError>;
