use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::activities_service::SignupError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Signup(#[from] SignupError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Signup(SignupError::ActivityNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Signup(SignupError::AlreadyEnrolled { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Signup(SignupError::MissingEmail) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            ApiError::Signup(SignupError::ActivityNotFound(_)) => "Activity not found",
            ApiError::Signup(SignupError::AlreadyEnrolled { .. }) => "Student is already signed up",
            ApiError::Signup(SignupError::MissingEmail) => "email query parameter is required",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
