use chrono::{serde::ts_seconds, DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError, VecSkipError};

use crate::util::string_or_number;

/// Top-level news response. A missing or malformed `Data` field reads as an
/// empty list, and items that cannot be parsed are skipped.
#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NewsResponse {
    #[serde(rename = "Data", default)]
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub data: Vec<ArticleResult>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ArticleResult {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub body: String,
    /// Short source key, like `coindesk`
    pub source: String,
    pub source_info: Option<SourceInfo>,
    #[serde(deserialize_with = "ts_seconds::deserialize")]
    pub published_on: DateTime<Utc>,
    pub url: String,
    pub imageurl: String,
    /// `|`-joined list
    pub categories: String,
    /// `|`-joined list
    pub tags: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SourceInfo {
    pub name: String,
}
