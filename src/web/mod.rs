pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::database::ActivityDirectory;
use routes::{activities, activity};

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn build_router(directory: Arc<ActivityDirectory>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(LANDING_PAGE) }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name",
            get(activities::activity_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        // Static files
        .nest_service(
            "/static",
            get_service(ServeDir::new(&config.static_dir)),
        )
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        // State
        .with_state(directory)
}
