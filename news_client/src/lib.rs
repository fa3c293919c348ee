mod error;
mod result;
mod util;

use reqwest::{Client, Url};
pub use reqwest::StatusCode;

use std::time::Duration;

use news_util::build_params;

pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::result::*;

pub const DEFAULT_BASE_URL: &str = "https://min-api.cryptocompare.com";
const NEWS_PATH: [&str; 3] = ["data", "v2", "news"];
const EXCLUDED_CATEGORIES: &str = "Sponsored";

#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl NewsClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Option<Duration>) -> Result<NewsClient> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(NewsClient {
            client,
            base_url,
            api_key,
        })
    }

    /// Fetch the latest English articles, optionally restricted to a category
    /// such as a coin symbol. Sponsored articles are always excluded.
    pub async fn fetch_articles(&self, categories: Option<&str>) -> Result<NewsResponse> {
        let url = self.news_url(categories)?;

        tracing::debug!("Requesting news, categories: {:?}", categories);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        let content = response.text().await?;

        parse_articles(categories.unwrap_or("general"), &content).await
    }

    /// The news endpoint below the base URL, keeping any path prefix of the base.
    pub(crate) fn news_url(&self, categories: Option<&str>) -> Result<Url> {
        let api_key = self.api_key.as_deref();
        let params = build_params! {
            required lang => "EN",
            optional categories,
            required excludeCategories => EXCLUDED_CATEGORIES,
            optional api_key,
        };

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(NEWS_PATH)
            .push("");
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }
}

/// Parse a response body, dumping it first when `CLIENT_LOG_DIR` is set.
/// A failed dump never fails the request.
pub(crate) async fn parse_articles(name: &str, content: &str) -> Result<NewsResponse> {
    if let Err(err) = log(name, content).await {
        tracing::warn!("Cannot dump news response for {}: {}", name, err);
    }
    let result: NewsResponse = serde_json::from_str(content)?;
    Ok(result)
}

async fn log(name: &str, content: &str) -> Result<()> {
    use std::path::PathBuf;
    use tokio::{fs::File, io::AsyncWriteExt};

    if let Ok(dir) = std::env::var("CLIENT_LOG_DIR") {
        let name = name.replace(|c: char| !c.is_ascii_alphanumeric(), "_");
        let time = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filepath = PathBuf::from(dir).join(format!("news_{}_{}.json", name, time));
        let mut file = File::create(filepath).await?;
        file.write_all(content.as_bytes()).await?;
    }
    Ok(())
}
