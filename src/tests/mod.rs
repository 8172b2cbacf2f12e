
use crate::config::QuipuConfig;
use crate::features::pages::{invalid_request_handler, pages_router};
use crate::render::TemplateRenderer;
use crate::store::local::{LocalImageStore, LocalPageStore};
use crate::AppState;
use axum::body::Body;
use axum::http::Request;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

// build a fully wired AppState over throwaway directories; the returned
// TempDir guards must stay alive for the duration of the test
pub fn setup_test_state() -> (AppState, TempDir, TempDir) {
    let data_dir = tempfile::tempdir().unwrap();
    let assets_dir = tempfile::tempdir().unwrap();

    let config = Arc::new(QuipuConfig {
        port: 0,
        data_dir: data_dir.path().to_path_buf(),
        assets_dir: assets_dir.path().to_path_buf(),
        // tests render with the real shipped templates
        templates_dir: PathBuf::from("./templates"),
    });

    let state = AppState {
        page_store: Arc::new(LocalPageStore::new(&config.data_dir).unwrap()),
        image_store: Arc::new(LocalImageStore::new(&config.assets_dir).unwrap()),
        renderer: Arc::new(TemplateRenderer::from_dir(&config.templates_dir).unwrap()),
        config: config.clone(),
    };

    (state, data_dir, assets_dir)
}

// the same router shape main() serves, minus the listener
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .merge(pages_router())
        .fallback(invalid_request_handler)
        .with_state(state)
}

pub const BOUNDARY: &str = "quipu-test-boundary";

// hand-rolled multipart payload: one text field plus an optional file field
pub fn multipart_payload(body: &str, image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut payload = Vec::new();

    payload.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"body\"\r\n\r\n{}\r\n",
            BOUNDARY, body
        )
        .as_bytes(),
    );

    if let Some((filename, bytes)) = image {
        payload.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: image/jpeg\r\n\r\n",
                BOUNDARY, filename
            )
            .as_bytes(),
        );
        payload.extend_from_slice(bytes);
        payload.extend_from_slice(b"\r\n");
    }

    payload.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    payload
}

pub fn save_request(uri: &str, payload: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(payload))
        .unwrap()
}
