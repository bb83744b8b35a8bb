//! Response helpers

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body when a record is present, empty `200` body when it is not
///
/// Lookups by id never answer 404: an absent record is an empty success.
#[derive(Debug)]
pub struct MaybeJson<T>(pub Option<T>);

impl<T: Serialize> IntoResponse for MaybeJson<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Some(value) => Json(value).into_response(),
            None => StatusCode::OK.into_response(),
        }
    }
}

impl<T> From<Option<T>> for MaybeJson<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}
