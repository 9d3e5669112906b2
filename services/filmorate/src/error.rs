use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use filmorate_core::error::{ErrorKind, error_response};
use filmorate_domain::id::{FilmId, GenreId, MpaId, UserId};

use crate::domain::validation::ValidationErrors;

/// Filmorate service error variants.
#[derive(Debug, thiserror::Error)]
pub enum FilmorateError {
    #[error("film with id={0} not found")]
    FilmNotFound(FilmId),
    #[error("user with id={0} not found")]
    UserNotFound(UserId),
    #[error("genre with id={0} not found")]
    GenreNotFound(GenreId),
    #[error("mpa rating with id={0} not found")]
    MpaNotFound(MpaId),
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ErrorKind for FilmorateError {
    fn kind(&self) -> &'static str {
        match self {
            Self::FilmNotFound(_) => "FILM_NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::GenreNotFound(_) => "GENRE_NOT_FOUND",
            Self::MpaNotFound(_) => "MPA_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::FilmNotFound(_)
            | Self::UserNotFound(_)
            | Self::GenreNotFound(_)
            | Self::MpaNotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        let Self::Validation(errors) = self else {
            return None;
        };
        let mut map = serde_json::Map::new();
        map.insert(
            "fields".to_owned(),
            serde_json::to_value(errors.fields()).unwrap_or_default(),
        );
        Some(map)
    }
}

impl IntoResponse for FilmorateError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}

// Extractor rejections are reported like any other invalid input.

impl From<JsonRejection> for FilmorateError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(ValidationErrors::single("body", rejection.body_text()))
    }
}

impl From<PathRejection> for FilmorateError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(ValidationErrors::single("path", rejection.body_text()))
    }
}

impl From<QueryRejection> for FilmorateError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(ValidationErrors::single("query", rejection.body_text()))
    }
}
