use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use crate::error::FilmorateError;

pub mod film;
pub mod lookup;
pub mod user;

/// `axum::Json` with rejections rendered as `VALIDATION_FAILED`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(FilmorateError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` with rejections rendered as `VALIDATION_FAILED`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(FilmorateError))]
pub struct PathParam<T>(pub T);

/// `axum::extract::Query` with rejections rendered as `VALIDATION_FAILED`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(FilmorateError))]
pub struct QueryParams<T>(pub T);

/// `{"id": n}` reference to a genre or MPA rating inside a request body.
#[derive(Debug, Deserialize)]
pub struct IdRef<T> {
    pub id: T,
}
