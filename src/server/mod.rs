//! Web server for the marketing site.
//!
//! Serves the home page, one page per service, static CSS/JS, media files
//! and the crawler files (`robots.txt`, `sitemap.xml`).

mod assets;
mod handlers;
mod routes;
pub mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::content::ServiceCatalog;

pub use assets::{CSS, JS};

/// URL prefix media files are served under.
pub const MEDIA_PREFIX: &str = "/media";

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub catalog: Arc<ServiceCatalog>,
    pub media_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let catalog = settings.load_catalog()?;
        Ok(Self::with_catalog(settings.clone(), catalog))
    }

    pub fn with_catalog(settings: Settings, catalog: ServiceCatalog) -> Self {
        Self {
            media_dir: settings.media_dir.clone(),
            settings: Arc::new(settings),
            catalog: Arc::new(catalog),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    tracing::info!(
        "Serving {} services, media from {}",
        state.catalog.len(),
        state.media_dir.display()
    );
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
