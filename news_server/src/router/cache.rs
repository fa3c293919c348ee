use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::{payload::CacheStatus, state::AppState};

pub fn cache_router() -> Router<AppState> {
    Router::new()
        .route("/cache", get(cache_status))
        .route("/cache/clear", post(clear_cache))
}

async fn cache_status(State(app_state): State<AppState>) -> Json<CacheStatus> {
    let entries = app_state.fetcher.cache().len().await;
    Json(CacheStatus { entries })
}

async fn clear_cache(State(app_state): State<AppState>) -> StatusCode {
    app_state.fetcher.clear_cache().await;
    StatusCode::NO_CONTENT
}
