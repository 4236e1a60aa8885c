//! Rendered-widget adapter.
//!
//! The widget page is an empty shell filled in by client-side script, so a
//! plain fetch sees nothing. A browser session renders it until the example
//! sentence shows up, and the markup is handed to the family parsers.

use crate::error::{Result, WotdError};
use crate::model::{Language, WordOfDay};
use crate::parsers;
use crate::renderer::Renderer;
use tracing::{debug, info, warn};

/// Widget URL; `{language}` is the lower-case language name.
pub const WIDGET_URL_TEMPLATE: &str =
    "https://wotd.transparent.com/widget/?lang={language}&theme=light";

/// Element whose presence means the widget finished rendering.
pub const READY_SELECTOR: &str = ".wotd-widget-sentence";

/// Where and how long to render widgets.
#[derive(Debug, Clone)]
pub struct WidgetSource {
    pub url_template: String,
    pub timeout_ms: u64,
}

impl WidgetSource {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            url_template: WIDGET_URL_TEMPLATE.to_string(),
            timeout_ms,
        }
    }

    pub fn widget_url(&self, language: &Language) -> String {
        self.url_template.replace("{language}", language.as_str())
    }

    /// Render the widget for `language`.
    ///
    /// A timeout is logged and reported as empty markup. The browser session
    /// is closed before returning on every path.
    pub async fn fetch_markup(&self, renderer: &dyn Renderer, language: &Language) -> Result<String> {
        let url = self.widget_url(language);
        info!("rendering widget for {language}: {url}");

        let mut session = renderer.launch().await?;
        let rendered = session.render(&url, READY_SELECTOR, self.timeout_ms).await;
        if let Err(e) = session.close().await {
            warn!("failed to close browser session for {language}: {e}");
        }

        match rendered {
            Ok(html) => {
                debug!("widget for {language} rendered ({} bytes)", html.len());
                Ok(html)
            }
            Err(WotdError::RenderTimeout { timeout_ms, .. }) => {
                warn!("widget for {language} did not render within {timeout_ms}ms: {url}");
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Render and parse today's word; `Ok(None)` when nothing rendered.
    pub async fn fetch(&self, renderer: &dyn Renderer, language: &Language) -> Result<Option<WordOfDay>> {
        let markup = self.fetch_markup(renderer, language).await?;
        if markup.trim().is_empty() {
            return Ok(None);
        }
        parsers::parse_widget(&markup, language).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RenderSession;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Copy)]
    enum Behavior {
        Html(&'static str),
        Timeout,
        Fail,
    }

    struct FakeRenderer {
        behavior: Behavior,
        launched: Arc<AtomicUsize>,
        closed: Arc<AtomicUsize>,
    }

    struct FakeSession {
        behavior: Behavior,
        closed: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Renderer for FakeRenderer {
        async fn launch(&self) -> Result<Box<dyn RenderSession>> {
            self.launched.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(FakeSession {
                behavior: self.behavior,
                closed: Arc::clone(&self.closed),
            }))
        }
    }

    #[async_trait]
    impl RenderSession for FakeSession {
        async fn render(&mut self, url: &str, ready_selector: &str, timeout_ms: u64) -> Result<String> {
            match self.behavior {
                Behavior::Html(html) => Ok(html.to_string()),
                Behavior::Timeout => Err(WotdError::RenderTimeout {
                    url: url.to_string(),
                    selector: ready_selector.to_string(),
                    timeout_ms,
                }),
                Behavior::Fail => Err(WotdError::Render("crashed".into())),
            }
        }

        async fn close(self: Box<Self>) -> Result<()> {
            self.closed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn fake(behavior: Behavior) -> FakeRenderer {
        FakeRenderer {
            behavior,
            launched: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }

    const KOREAN_WIDGET: &str = r#"<html><body><div class="wotd-widget">
        <p class="wotd-widget-word">사과</p>
        <p class="wotd-widget-romanization">sagwa</p>
        <p class="wotd-widget-translation">apple</p>
        <p class="wotd-widget-sentence">사과를 먹어요.</p>
        <p class="wotd-widget-romanization">sagwareul meogeoyo.</p>
        <p class="wotd-widget-sentence-translation">I eat an apple.</p>
    </div></body></html>"#;

    #[test]
    fn test_widget_url_interpolates_language() {
        let source = WidgetSource::new(1000);
        let url = source.widget_url(&"korean".parse().unwrap());
        assert_eq!(url, "https://wotd.transparent.com/widget/?lang=korean&theme=light");
    }

    #[tokio::test]
    async fn test_session_closed_after_success() {
        let renderer = fake(Behavior::Html(KOREAN_WIDGET));
        let word = WidgetSource::new(1000)
            .fetch(&renderer, &"korean".parse().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(word.headword(), "사과");
        assert_eq!(renderer.launched.load(Ordering::SeqCst), 1);
        assert_eq!(renderer.closed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timeout_yields_no_record_and_closes_session() {
        let renderer = fake(Behavior::Timeout);
        let source = WidgetSource::new(50);
        let markup = source
            .fetch_markup(&renderer, &"korean".parse().unwrap())
            .await
            .unwrap();
        assert!(markup.is_empty());

        let word = source.fetch(&renderer, &"korean".parse().unwrap()).await.unwrap();
        assert!(word.is_none());
        assert_eq!(renderer.closed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_render_error_propagates_and_closes_session() {
        let renderer = fake(Behavior::Fail);
        let result = WidgetSource::new(50)
            .fetch(&renderer, &"korean".parse().unwrap())
            .await;
        assert!(matches!(result, Err(WotdError::Render(_))));
        assert_eq!(renderer.closed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unparseable_markup_is_parse_error() {
        let renderer = fake(Behavior::Html("<html><body><p>maintenance</p></body></html>"));
        let result = WidgetSource::new(50)
            .fetch(&renderer, &"korean".parse().unwrap())
            .await;
        assert!(matches!(result, Err(WotdError::Parse(_))));
        assert_eq!(renderer.closed.load(Ordering::SeqCst), 1);
    }
}
