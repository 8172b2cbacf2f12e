use axum::response::{IntoResponse, Response};
use derive_more::derive::Display;
use http::StatusCode;

// request-scoped error surface; nothing in here may take the process down.
// a missing page never reaches the client as an error: view redirects to
// the edit form and edit serves a blank page instead.
#[derive(Debug, Display)]
pub enum PageError {
    #[display("Invalid page request: {}", _0)]
    InvalidTitle(String),
    #[display("Bad request: {}", _0)]
    BadRequest(String),
    #[display("Internal error: {}", _0)]
    Internal(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match &self {
            PageError::InvalidTitle(_) => StatusCode::NOT_FOUND,
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
