//! Renderer abstraction for pages whose content is injected by scripts.
//!
//! Defines the `Renderer` and `RenderSession` traits that abstract over
//! the browser engine (currently Chromium via chromiumoxide).

pub mod chromium;

use crate::error::{Result, WotdError};
use async_trait::async_trait;

/// A browser engine that can start isolated rendering sessions.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Start a fresh, isolated session (a new browser process).
    async fn launch(&self) -> Result<Box<dyn RenderSession>>;
}

/// One running browser session.
///
/// Callers must call [`RenderSession::close`] on every exit path; that is
/// what tears the browser process down.
#[async_trait]
pub trait RenderSession: Send {
    /// Navigate to `url` and wait up to `timeout_ms` for an element matching
    /// `ready_selector`, then return the fully rendered markup.
    ///
    /// Returns [`WotdError::RenderTimeout`] if the element never appears.
    async fn render(&mut self, url: &str, ready_selector: &str, timeout_ms: u64) -> Result<String>;
    /// Shut the session down.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// A renderer used when no browser is available.
///
/// Static-page languages keep working; widget languages fail to launch and
/// end the run with no record.
pub struct NoopRenderer;

#[async_trait]
impl Renderer for NoopRenderer {
    async fn launch(&self) -> Result<Box<dyn RenderSession>> {
        Err(WotdError::Render(
            "browser not available (set WOTD_CHROMIUM_PATH or install Chromium)".into(),
        ))
    }
}
