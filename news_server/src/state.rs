use std::sync::Arc;

use news_client::NewsClient;
use news_core::CachedNewsFetcher;

#[derive(Clone)]
pub struct AppState {
    /// News fetcher shared by all requests, owns the article cache
    pub fetcher: Arc<CachedNewsFetcher<NewsClient>>,
}
