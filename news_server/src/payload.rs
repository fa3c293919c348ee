use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsQuery {
    pub limit: Option<usize>,
}

impl NewsQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub entries: usize,
}
