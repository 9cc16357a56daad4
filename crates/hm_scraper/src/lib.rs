pub mod article;
pub mod fetch;
pub mod listing;

pub use article::ArticleExtractor;
pub use fetch::{Fetch, HttpFetcher};
pub use listing::LinkCollector;
