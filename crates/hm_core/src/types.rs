use serde::{Deserialize, Serialize};

/// One fully extracted article. Every field is mandatory: extraction
/// either fills all of them or fails naming the first missing anchor,
/// so a partially populated `Post` never exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Source page URL, the record's unique key.
    pub url: String,
    pub title: String,
    /// Publication date as printed on the page, normalized at render time.
    pub date: String,
    /// Category labels in document order.
    pub tags: Vec<String>,
    /// Full-size header image URL.
    pub image: String,
    /// Raw HTML of the article body, child fragments concatenated.
    pub body: String,
}
