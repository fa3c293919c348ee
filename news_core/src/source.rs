use async_trait::async_trait;

use news_client::{ArticleResult, NewsClient};

/// Where raw article batches come from.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch the latest batch, filtered by `topic` when given.
    async fn fetch_raw(&self, topic: Option<&str>) -> news_client::Result<Vec<ArticleResult>>;
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn fetch_raw(&self, topic: Option<&str>) -> news_client::Result<Vec<ArticleResult>> {
        let response = self.fetch_articles(topic).await?;
        Ok(response.data)
    }
}
