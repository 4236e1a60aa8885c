//! CLI subcommand implementations for the `wotd` binary.

pub mod doctor;
pub mod languages_cmd;
pub mod output;
pub mod preview_cmd;
pub mod send_cmd;

use crate::acquisition::http_client::HttpClient;
use crate::acquisition::Sources;
use crate::config::Config;
use crate::dispatch::transport::WebhookTransport;
use crate::dispatch::Pipeline;
use crate::renderer::chromium::ChromiumRenderer;
use crate::renderer::{NoopRenderer, Renderer};
use std::sync::Arc;
use tracing::{info, warn};

/// Assemble the production pipeline from resolved configuration.
///
/// Without a browser, widget languages fail at launch and static-page
/// languages keep working.
pub fn build_pipeline(config: &Config) -> Pipeline {
    let client = HttpClient::new(config.fetch_timeout_ms);

    let renderer: Arc<dyn Renderer> = match ChromiumRenderer::discover(config.chromium_path.as_deref()) {
        Some(renderer) => {
            info!("using Chromium at {}", renderer.chrome_path().display());
            Arc::new(renderer)
        }
        None => {
            warn!("Chromium not found; widget languages are unavailable");
            Arc::new(NoopRenderer)
        }
    };

    Pipeline {
        sources: Sources::builtin(config.render_timeout_ms),
        client: client.clone(),
        renderer,
        transport: Arc::new(WebhookTransport::new(client)),
    }
}
