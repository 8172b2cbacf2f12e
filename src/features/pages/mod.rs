pub mod error;

use crate::domain::{validate_title, Page};
use crate::AppState;
use axum::{
    extract::{Multipart, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use error::PageError;

pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/view/{title}", get(view_page_handler))
        .route("/edit/{title}", get(edit_page_handler))
        .route("/save/{title}", post(save_page_handler))
}

// anything that is not /view, /edit, /save or an asset is not a page request
pub async fn invalid_request_handler() -> PageError {
    PageError::InvalidTitle("unrecognized path".to_string())
}

async fn view_page_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Response, PageError> {
    validate_title(&title).map_err(|e| PageError::InvalidTitle(e.to_string()))?;

    let page = match state.page_store.load(&title).await {
        Ok(Some(page)) => page,

        // no file behind this title yet, send the client to the edit form
        Ok(None) => return Ok(Redirect::to(&format!("/edit/{}", title)).into_response()),

        // an unreadable file is treated the same way; the error is worth a log line
        Err(e) => {
            eprintln!("Error loading page {}: {}", title, e);
            return Ok(Redirect::to(&format!("/edit/{}", title)).into_response());
        }
    };

    let html = state
        .renderer
        .render_view(&page)
        .map_err(|e| PageError::Internal(e.to_string()))?;

    Ok(Html(html).into_response())
}

async fn edit_page_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Html<String>, PageError> {
    validate_title(&title).map_err(|e| PageError::InvalidTitle(e.to_string()))?;

    let page = match state.page_store.load(&title).await {
        Ok(Some(page)) => page,
        Ok(None) => Page::empty(&title),
        Err(e) => {
            eprintln!("Error loading page {}: {}", title, e);
            Page::empty(&title)
        }
    };

    let html = state
        .renderer
        .render_edit(&page)
        .map_err(|e| PageError::Internal(e.to_string()))?;

    Ok(Html(html))
}

async fn save_page_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
    mut multipart: Multipart,
) -> Result<Redirect, PageError> {
    validate_title(&title).map_err(|e| PageError::InvalidTitle(e.to_string()))?;

    let mut body = String::new();
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PageError::BadRequest(format!("Malformed form upload: {}", e)))?
    {
        // take the name up front, reading the field consumes it
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "body" => {
                body = field
                    .text()
                    .await
                    .map_err(|e| PageError::BadRequest(format!("Unreadable body field: {}", e)))?;
            }
            "image" => {
                // a file input submitted without a selection arrives as a
                // field with an empty filename; skip it, no error, no write
                let has_file = field.file_name().map(|n| !n.is_empty()).unwrap_or(false);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| PageError::BadRequest(format!("Unreadable image field: {}", e)))?;
                if has_file {
                    image = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    state
        .page_store
        .save(&title, body.as_bytes())
        .await
        .map_err(|e| PageError::Internal(format!("Failed to save page {}: {}", title, e)))?;

    if let Some(bytes) = image {
        state
            .image_store
            .store(&title, &bytes)
            .await
            .map_err(|e| PageError::Internal(format!("Failed to store image for {}: {}", title, e)))?;
    }

    Ok(Redirect::to(&format!("/view/{}", title)))
}
