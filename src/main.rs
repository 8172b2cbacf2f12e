use crate::config::QuipuConfig;
use crate::render::TemplateRenderer;
use crate::store::local::{LocalImageStore, LocalPageStore};
use crate::store::{ImageStore, PageStore};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use dotenv;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;

pub mod config;
mod domain;
mod features;
mod render;
mod store;

#[cfg(test)]
mod tests;

// multipart budget for a page body plus one image
const UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub page_store: Arc<dyn PageStore>,
    pub image_store: Arc<dyn ImageStore>,
    pub renderer: Arc<TemplateRenderer>,
    pub config: Arc<QuipuConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = QuipuConfig::from_env();
    let shared_config = Arc::new(config.clone());

    // the stores own their directories and create them if missing
    let page_store = LocalPageStore::new(&config.data_dir)?;
    let image_store = LocalImageStore::new(&config.assets_dir)?;

    // compile the template set up front; a missing or broken template is a
    // startup failure, not a per-request one
    let renderer = TemplateRenderer::from_dir(&config.templates_dir)?;

    let app_state = AppState {
        page_store: Arc::new(page_store),
        image_store: Arc::new(image_store),
        renderer: Arc::new(renderer),
        config: shared_config,
    };

    println!("Starting server...");

    // start router setup

    // page routes, static assets, and the catch-all for invalid paths;
    // axum's stock body cap is swapped for the multipart upload budget
    let app = Router::new()
        .merge(features::pages::pages_router())
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback(features::pages::invalid_request_handler)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(UPLOAD_LIMIT_BYTES))
        .with_state(app_state.clone());

    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", app_state.config.port)).await?;
    println!("Server listening on http://0.0.0.0:{}", app_state.config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
