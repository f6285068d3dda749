use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::ActivityDirectory;
use crate::models::Activity;
use crate::services::activities_service::{self, ActivityListing};
use crate::web::error::ApiError;

pub async fn activities_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<ActivityListing> {
    Json(activities_service::list_activities(&directory))
}

pub async fn activity_handler(
    Path(activity_name): Path<String>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<Activity>, ApiError> {
    let activity = activities_service::get_activity(&directory, &activity_name)?;
    Ok(Json(activity))
}
