use chrono::{DateTime, Utc};
use serde::Serialize;

use std::collections::BTreeSet;

use news_client::ArticleResult;
use news_util::{non_empty, preview, split_delimited, time_ago_now};

/// Maximum characters kept from an article body.
pub const BODY_PREVIEW_LENGTH: usize = 200;
const LIST_DELIMITER: char = '|';
const UNKNOWN_SOURCE: &str = "Unknown";

/// A news article in the shape served to the dashboard, independent of the remote schema.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_snippet: Option<String>,
    /// Publisher name
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl Article {
    pub fn time_ago(&self) -> String {
        time_ago_now(self.published_at)
    }
}

impl From<&ArticleResult> for Article {
    fn from(result: &ArticleResult) -> Self {
        let source = result
            .source_info
            .as_ref()
            .and_then(|info| non_empty(&info.name))
            .or_else(|| non_empty(&result.source))
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

        Article {
            id: result.id.clone(),
            title: result.title.trim().to_string(),
            body_snippet: preview(&result.body, BODY_PREVIEW_LENGTH),
            source,
            published_at: result.published_on,
            url: result.url.clone(),
            image_url: non_empty(&result.imageurl),
            categories: split_delimited(&result.categories, LIST_DELIMITER),
            tags: split_delimited(&result.tags, LIST_DELIMITER),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use news_client::SourceInfo;

    fn raw() -> ArticleResult {
        ArticleResult {
            id: "1".to_string(),
            title: " Bitcoin ETF flows turn positive ".to_string(),
            body: "b".repeat(250),
            source: "coindesk".to_string(),
            source_info: Some(SourceInfo {
                name: "CoinDesk".to_string(),
                ..Default::default()
            }),
            published_on: Utc.timestamp_opt(1710936000, 0).unwrap(),
            url: "https://example.com/a".to_string(),
            imageurl: "".to_string(),
            categories: "BTC|Market".to_string(),
            tags: "ETF".to_string(),
        }
    }

    #[test]
    fn test_article_from_result() {
        let article = Article::from(&raw());
        assert_eq!(article.title, "Bitcoin ETF flows turn positive");
        assert_eq!(article.source, "CoinDesk");
        assert_eq!(article.published_at.timestamp(), 1710936000);
        assert_eq!(article.image_url, None);
        assert!(article.categories.contains("BTC") && article.categories.contains("Market"));
        assert_eq!(article.tags.len(), 1);

        let snippet = article.body_snippet.unwrap();
        assert_eq!(snippet.chars().count(), BODY_PREVIEW_LENGTH + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_source_fallback() {
        let mut result = raw();
        result.source_info = None;
        assert_eq!(Article::from(&result).source, "coindesk");

        result.source = String::new();
        assert_eq!(Article::from(&result).source, UNKNOWN_SOURCE);
    }

    #[test]
    fn test_time_ago() {
        let mut result = raw();
        result.published_on = Utc::now() - chrono::Duration::minutes(5);
        assert_eq!(Article::from(&result).time_ago(), "5m ago");
    }

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let mut result = raw();
        result.body = String::new();
        let json = serde_json::to_value(Article::from(&result)).unwrap();
        assert!(json.get("bodySnippet").is_none());
        assert!(json.get("imageUrl").is_none());
        assert_eq!(json["publishedAt"], "2024-03-20T12:00:00Z");
    }
}
