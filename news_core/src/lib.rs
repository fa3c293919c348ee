pub mod article;
pub mod cache;
pub mod error;
pub mod fetcher;
pub mod pipeline;
pub mod source;

pub use article::Article;
pub use cache::{CacheEntry, CacheKey, NewsCache};
pub use error::*;
pub use fetcher::{CachedNewsFetcher, FetchOutcome, FetcherConfig};
pub use source::NewsSource;
