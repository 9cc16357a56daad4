use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use hm_core::{Post, Result};

/// One row of the intermediate CSV record store. Scalar columns only;
/// the tag list is stored in its front-matter rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRow {
    /// Ordinal assigned at store time, the record's original identifier.
    pub id: u64,
    pub url: String,
    pub title: String,
    pub tags: String,
    pub date: String,
    pub image: String,
    pub body: String,
}

impl PostRow {
    pub fn from_post(id: u64, post: &Post) -> Self {
        Self {
            id,
            url: post.url.clone(),
            title: post.title.clone(),
            tags: format_tags(&post.tags),
            date: post.date.clone(),
            image: post.image.clone(),
            body: post.body.clone(),
        }
    }
}

/// Serializes tags once, in the bracketed list form the front matter
/// embeds verbatim: `['a', 'b']`.
pub fn format_tags(tags: &[String]) -> String {
    let quoted: Vec<String> = tags.iter().map(|tag| format!("'{}'", tag)).collect();
    format!("[{}]", quoted.join(", "))
}

/// The tabular record store between extractor and renderer, one row per
/// successfully extracted article, keyed by source URL.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn write(&self, posts: &[Post]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for (id, post) in posts.iter().enumerate() {
            writer.serialize(PostRow::from_post(id as u64, post))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn read(&self) -> Result<Vec<PostRow>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }
}
