use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::ActivityDirectory;
use crate::services::activities_service::{self, SignupConfirmation, SignupError};
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: Option<String>,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<SignupConfirmation>, ApiError> {
    let email = query.email.ok_or(SignupError::MissingEmail)?;
    let confirmation = activities_service::signup(&directory, &activity_name, &email)?;
    Ok(Json(confirmation))
}
