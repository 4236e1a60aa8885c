//! Source adapters that turn a language into a [`WordOfDay`].
//!
//! Languages with a static page are fetched over plain HTTP; everything else
//! goes through the rendered widget and the family parsers.

pub mod http_client;
pub mod static_page;
pub mod widget;

use crate::error::Result;
use crate::model::{Language, WordOfDay};
use crate::renderer::Renderer;
use http_client::HttpClient;
use static_page::StaticPageConfig;
use widget::WidgetSource;

/// Which adapter serves a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    StaticPage(&'a StaticPageConfig),
    Widget,
}

/// The full set of sources: static pages by language, widget for the rest.
#[derive(Debug, Clone)]
pub struct Sources {
    pub static_pages: Vec<StaticPageConfig>,
    pub widget: WidgetSource,
}

impl Sources {
    /// Built-in static pages plus the public widget.
    pub fn builtin(render_timeout_ms: u64) -> Self {
        Self {
            static_pages: static_page::builtin_static_pages(),
            widget: WidgetSource::new(render_timeout_ms),
        }
    }

    pub fn route(&self, language: &Language) -> Route<'_> {
        match self.static_pages.iter().find(|c| &c.language == language) {
            Some(config) => Route::StaticPage(config),
            None => Route::Widget,
        }
    }

    /// Acquire today's word for `language`.
    ///
    /// `Ok(None)` means the source rendered nothing; errors are acquisition
    /// failures for the caller to log.
    pub async fn acquire(
        &self,
        client: &HttpClient,
        renderer: &dyn Renderer,
        language: &Language,
    ) -> Result<Option<WordOfDay>> {
        match self.route(language) {
            Route::StaticPage(config) => static_page::fetch(client, config).await.map(Some),
            Route::Widget => self.widget.fetch(renderer, language).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_prefers_static_page() {
        let sources = Sources::builtin(1000);
        assert!(matches!(
            sources.route(&"spanish".parse().unwrap()),
            Route::StaticPage(_)
        ));
        assert_eq!(sources.route(&"japanese".parse().unwrap()), Route::Widget);
        assert_eq!(sources.route(&"french".parse().unwrap()), Route::Widget);
    }
}
