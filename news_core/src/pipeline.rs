// Turns a raw batch from the news source into the articles stored in the cache.

use itertools::Itertools;

use news_client::ArticleResult;
use news_util::title_key;

use crate::article::Article;

/// Deduplicate by normalized title, keep the first `limit` survivors in source
/// order and normalize them. Items without a title are dropped first.
pub fn transform(batch: Vec<ArticleResult>, limit: usize) -> Vec<Article> {
    batch
        .iter()
        .filter(|item| !item.title.trim().is_empty())
        .unique_by(|item| title_key(&item.title))
        .take(limit)
        .map(Article::from)
        .collect()
}
