//! Chromium-based renderer using chromiumoxide.

use super::{RenderSession, Renderer};
use crate::config;
use crate::error::{Result, WotdError};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// How often the ready selector is polled while waiting.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Find the Chromium binary path.
pub fn find_chromium(explicit: Option<&Path>) -> Option<PathBuf> {
    // 1. Explicit path (WOTD_CHROMIUM_PATH)
    if let Some(path) = explicit {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. ~/.wotd/chromium/
    let local = config::data_dir().join("chromium");
    let candidates = if cfg!(target_os = "macos") {
        vec![
            local.join("chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
            local.join("chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
            local.join("chrome"),
        ]
    } else {
        vec![local.join("chrome-linux64/chrome"), local.join("chrome")]
    };
    for c in candidates {
        if c.exists() {
            return Some(c);
        }
    }

    // 3. System PATH
    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    // 4. Common macOS location
    if cfg!(target_os = "macos") {
        let common =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// Launches one headless, incognito Chromium per session.
pub struct ChromiumRenderer {
    chrome_path: PathBuf,
}

impl ChromiumRenderer {
    pub fn new(chrome_path: PathBuf) -> Self {
        Self { chrome_path }
    }

    /// Locate a browser binary and build a renderer for it.
    pub fn discover(explicit: Option<&Path>) -> Option<Self> {
        find_chromium(explicit).map(Self::new)
    }

    pub fn chrome_path(&self) -> &Path {
        &self.chrome_path
    }
}

#[async_trait]
impl Renderer for ChromiumRenderer {
    async fn launch(&self) -> Result<Box<dyn RenderSession>> {
        let config = BrowserConfig::builder()
            .chrome_executable(&self.chrome_path)
            .arg("--headless=new")
            .arg("--incognito")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking")
            .build()
            .map_err(|e| WotdError::Render(format!("failed to build browser config: {e}")))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| WotdError::Render(format!("failed to launch Chromium: {e}")))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        debug!("Chromium launched from {}", self.chrome_path.display());
        Ok(Box::new(ChromiumSession { browser, handler }))
    }
}

/// A running Chromium process and its CDP event pump.
pub struct ChromiumSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

#[async_trait]
impl RenderSession for ChromiumSession {
    async fn render(&mut self, url: &str, ready_selector: &str, timeout_ms: u64) -> Result<String> {
        let browser = &self.browser;
        let waited = tokio::time::timeout(Duration::from_millis(timeout_ms), async {
            let page = browser
                .new_page(url)
                .await
                .map_err(|e| WotdError::Render(format!("navigation to {url} failed: {e}")))?;
            while page.find_element(ready_selector).await.is_err() {
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            Ok::<_, WotdError>(page)
        })
        .await;

        let page = match waited {
            Ok(page) => page?,
            Err(_) => {
                return Err(WotdError::RenderTimeout {
                    url: url.to_string(),
                    selector: ready_selector.to_string(),
                    timeout_ms,
                })
            }
        };

        let html: String = page
            .evaluate("document.documentElement.outerHTML")
            .await
            .map_err(|e| WotdError::Render(format!("failed to read HTML: {e}")))?
            .into_value()
            .map_err(|e| WotdError::Render(format!("failed to convert HTML result: {e:?}")))?;

        let _ = page.close().await;
        Ok(html)
    }

    async fn close(mut self: Box<Self>) -> Result<()> {
        if let Err(e) = self.browser.close().await {
            warn!("graceful browser close failed: {e}, killing process");
            if let Some(Err(e)) = self.browser.kill().await {
                warn!("failed to kill browser: {e}");
            }
        }
        let _ = self.browser.wait().await;
        self.handler.abort();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_path_is_skipped() {
        let bogus = Path::new("/nonexistent/wotd/chrome");
        if let Some(found) = find_chromium(Some(bogus)) {
            assert_ne!(found, bogus);
        }
    }

    #[tokio::test]
    #[ignore] // Requires Chromium to be installed
    async fn test_chromium_renders_injected_content() {
        let renderer = ChromiumRenderer::discover(None).expect("Chromium not found");
        let mut session = renderer.launch().await.expect("failed to launch");

        let page = "data:text/html,<div id='root'></div><script>\
            setTimeout(function(){document.getElementById('root').innerHTML=\
            '<p class=\"wotd-widget-sentence\">Hola</p>'},300)</script>";
        let html = session
            .render(page, ".wotd-widget-sentence", 10_000)
            .await
            .expect("render failed");
        assert!(html.contains("Hola"));

        let timeout = session.render("data:text/html,<p>empty</p>", ".never", 500).await;
        assert!(matches!(timeout, Err(WotdError::RenderTimeout { .. })));

        session.close().await.expect("close failed");
    }
}
