use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use news_core::Article;

use crate::{error::Result, payload::NewsQuery, state::AppState};

pub fn news_router() -> Router<AppState> {
    Router::new()
        .route("/news", get(fetch_general_news))
        .route("/news/:topic", get(fetch_topic_news))
}

async fn fetch_general_news(
    State(app_state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<Vec<Article>>> {
    let articles = app_state.fetcher.fetch_general_news(query.limit()).await?;
    Ok(Json(articles))
}

async fn fetch_topic_news(
    State(app_state): State<AppState>,
    Path(topic): Path<String>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<Vec<Article>>> {
    let articles = app_state.fetcher.fetch_topic_news(&topic, query.limit()).await?;
    Ok(Json(articles))
}
