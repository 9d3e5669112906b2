use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Implemented by service error enums to share one JSON error body.
pub trait ErrorKind: std::fmt::Display + std::fmt::Debug {
    /// Stable machine-readable code, e.g. `FILM_NOT_FOUND`.
    fn kind(&self) -> &'static str;

    fn status(&self) -> StatusCode;

    /// Extra fields merged into the body next to `kind` and `message`.
    fn details(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        None
    }
}

/// Render `{"kind", "message", ..details}` with the error's status code.
pub fn error_response<E: ErrorKind>(error: &E) -> Response {
    let status = error.status();
    // Log 500s only. tower-http TraceLayer already records method/uri/status for all
    // requests. 4xx are expected client errors.
    if status.is_server_error() {
        tracing::error!(error = ?error, kind = error.kind(), "internal error");
    }
    let mut body = serde_json::Map::new();
    body.insert("kind".to_owned(), error.kind().into());
    body.insert("message".to_owned(), error.to_string().into());
    if let Some(details) = error.details() {
        body.extend(details);
    }
    (status, axum::Json(serde_json::Value::Object(body))).into_response()
}
