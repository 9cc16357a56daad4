use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use hm_core::{Error, Post, Result};
use hm_store::FailureLog;

use crate::fetch::Fetch;

/// Turns article URLs into validated records, or registers them as
/// unparseable.
pub struct ArticleExtractor<'a> {
    fetcher: &'a dyn Fetch,
}

impl<'a> ArticleExtractor<'a> {
    pub fn new(fetcher: &'a dyn Fetch) -> Self {
        Self { fetcher }
    }

    /// Fetches one article page and pulls out the full record, failing on
    /// the first absent anchor.
    pub async fn extract(&self, url: &str) -> Result<Post> {
        let html = self.fetcher.fetch(url).await?;
        let post = parse_post(url, &html)?;
        info!("{}", post.title);
        Ok(post)
    }

    /// Runs extraction over every URL in order, partitioning the results
    /// into returned records and logged failures. Only a missing anchor
    /// is survivable; network and I/O faults abort the run.
    pub async fn extract_all(&self, urls: &[String], failures: &FailureLog) -> Result<Vec<Post>> {
        let mut posts = Vec::new();
        for url in urls {
            info!("{}", url);
            match self.extract(url).await {
                Ok(post) => posts.push(post),
                Err(err @ Error::MissingField(_)) => {
                    warn!("skipping {}: {}", url, err);
                    failures.append(url)?;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(posts)
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField(field))
}

fn select_first<'b>(scope: ElementRef<'b>, selector: &str) -> Option<ElementRef<'b>> {
    let selector = Selector::parse(selector).unwrap();
    scope.select(&selector).next()
}

/// Serialized markup of an element's direct children, elements and text
/// alike, concatenated in document order.
fn serialize_children(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            out.push_str(&el.html());
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
    out
}

/// Structural extraction against the Herald theme markup. Anchors are
/// checked in document order; the first one missing names the failure
/// and no partial record is returned.
pub fn parse_post(url: &str, html: &str) -> Result<Post> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let thumbnail = require(
        select_first(root, ".herald-post-thumbnail-single"),
        "thumbnail",
    )?;
    let header = require(select_first(thumbnail, "header.entry-header"), "header")?;

    let title_div = require(select_first(header, "div"), "title")?;
    let title = require(title_div.text().next(), "title")?.trim().to_string();

    let date = require(select_first(header, ".herald-date"), "date")?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    let meta = require(select_first(header, ".meta-category"), "tags")?;
    let anchor_selector = Selector::parse("a").unwrap();
    let tags: Vec<String> = meta
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.text().next())
        .map(str::to_string)
        .collect();

    let image = require(
        select_first(root, "img.attachment-herald-lay-a-full")
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string),
        "image",
    )?;

    let content = require(select_first(root, ".entry-content"), "body")?;
    let body = serialize_children(content).replace('\n', " ");

    Ok(Post {
        url: url.to_string(),
        title,
        date,
        tags,
        image,
        body,
    })
}
