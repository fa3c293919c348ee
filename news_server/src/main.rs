mod config;
mod error;
mod payload;
mod router;
mod state;

use anyhow::Context;
use axum::Router;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use std::sync::Arc;

use news_client::NewsClient;
use news_core::{CachedNewsFetcher, FetcherConfig, NewsCache};

use crate::{config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Initialize logger
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()?
        .add_directive("hyper::proto=info".parse()?)
        .add_directive("hyper::client=info".parse()?)
        .add_directive("reqwest=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // 2. Read configuration
    let config = Config::from_env()?;

    // 3. Initialize news client and cache
    let client = NewsClient::new(&config.api_url, config.api_key.clone(), Some(config.timeout))
        .context("cannot create news client")?;
    let cache = Arc::new(NewsCache::new());
    let fetcher = CachedNewsFetcher::new(
        client,
        cache,
        FetcherConfig {
            freshness: config.cache_ttl,
        },
    );

    // 4. Setup state and router
    let app_state = AppState {
        fetcher: Arc::new(fetcher),
    };

    let app = Router::new()
        .merge(router::news::news_router())
        .merge(router::cache::cache_router())
        .layer(TraceLayer::new_for_http().on_request(()))
        .with_state(app_state);

    // 5. Start server
    tracing::info!("Server starting at {}", config.server_address);
    axum::Server::bind(&config.server_address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
