pub mod cache;
pub mod news;
