use std::collections::HashSet;

use scraper::{Html, Selector};
use tracing::info;
use url::Url;

use hm_core::{Error, Result};

use crate::fetch::Fetch;

/// Hard cap on listing pages per category, the root page included. A
/// category deeper than this is treated as a crawl bug, not more data.
pub const MAX_PAGES: usize = 29;

/// Walks paginated category listings and collects article permalinks.
pub struct LinkCollector<'a> {
    fetcher: &'a dyn Fetch,
}

impl<'a> LinkCollector<'a> {
    pub fn new(fetcher: &'a dyn Fetch) -> Self {
        Self { fetcher }
    }

    /// Walks one category's listing pages in order, stopping at the first
    /// page that yields no articles. Every page full means the cap was
    /// hit, which is fatal rather than silently truncated.
    pub async fn collect_section(&self, name: &str, root: &str) -> Result<Vec<String>> {
        Url::parse(root).map_err(|_| Error::InvalidUrl(root.to_string()))?;
        info!("section {}", name);

        let mut links = Vec::new();
        for page in 1..=MAX_PAGES {
            let url = if page == 1 {
                root.to_string()
            } else {
                format!("{}/page/{}", root, page)
            };
            info!("{}", url);

            let html = self.fetcher.fetch(&url).await?;
            let found = article_links(&html);
            if found.is_empty() {
                return Ok(links);
            }
            links.extend(found);
        }
        Err(Error::TooManyPages(root.to_string()))
    }

    /// Union over every configured category, discovery order, first
    /// occurrence wins.
    pub async fn collect_all(&self, categories: &[(String, String)]) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut links = Vec::new();
        for (name, root) in categories {
            for link in self.collect_section(name, root).await? {
                if seen.insert(link.clone()) {
                    links.push(link);
                }
            }
        }
        Ok(links)
    }
}

/// Every article permalink on one listing page: the first anchor of each
/// `article` element under the main content container. A page without
/// the container counts as empty, which also covers 404 bodies.
fn article_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let content_selector = Selector::parse(".herald-main-content").unwrap();
    let article_selector = Selector::parse("article").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let content = match document.select(&content_selector).next() {
        Some(element) => element,
        None => return Vec::new(),
    };

    content
        .select(&article_selector)
        .filter_map(|article| article.select(&anchor_selector).next())
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct CannedFetcher {
        pages: HashMap<String, String>,
        fetched: Mutex<Vec<String>>,
    }

    impl CannedFetcher {
        fn new(pages: Vec<(String, String)>) -> Self {
            Self {
                pages: pages.into_iter().collect(),
                fetched: Mutex::new(Vec::new()),
            }
        }

        fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetch for CannedFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.fetched.lock().unwrap().push(url.to_string());
            // Unknown pages behave like the site's 404 page: a body
            // without the main content container.
            Ok(self
                .pages
                .get(url)
                .cloned()
                .unwrap_or_else(|| "<html><body>not found</body></html>".to_string()))
        }
    }

    fn listing_page(hrefs: &[&str]) -> String {
        let articles: String = hrefs
            .iter()
            .map(|href| format!("<article><a href=\"{}\">post</a></article>", href))
            .collect();
        format!(
            "<html><body><div class=\"herald-main-content\">{}</div></body></html>",
            articles
        )
    }

    #[test]
    fn test_article_links() {
        let links = article_links(&listing_page(&["http://shamir.lv/a", "http://shamir.lv/b"]));
        assert_eq!(links, vec!["http://shamir.lv/a", "http://shamir.lv/b"]);
    }

    #[test]
    fn test_article_links_without_container() {
        assert!(article_links("<html><body><p>gone</p></body></html>").is_empty());
    }

    #[tokio::test]
    async fn test_stops_at_first_empty_page() {
        let root = "http://shamir.lv/category/news";
        let fetcher = CannedFetcher::new(vec![
            (root.to_string(), listing_page(&["http://shamir.lv/a"])),
            (
                format!("{}/page/2", root),
                listing_page(&["http://shamir.lv/b"]),
            ),
            // page 3 exists but lists nothing
            (format!("{}/page/3", root), listing_page(&[])),
            (
                format!("{}/page/4", root),
                listing_page(&["http://shamir.lv/never"]),
            ),
        ]);

        let collector = LinkCollector::new(&fetcher);
        let links = collector.collect_section("news", root).await.unwrap();

        assert_eq!(links, vec!["http://shamir.lv/a", "http://shamir.lv/b"]);
        let fetched = fetcher.fetched();
        assert_eq!(fetched.len(), 3);
        assert!(!fetched.contains(&format!("{}/page/4", root)));
    }

    #[tokio::test]
    async fn test_every_page_full_is_fatal() {
        let root = "http://shamir.lv/category/news";
        let mut pages = vec![(root.to_string(), listing_page(&["http://shamir.lv/p1"]))];
        for page in 2..=MAX_PAGES {
            let href = format!("http://shamir.lv/p{}", page);
            pages.push((
                format!("{}/page/{}", root, page),
                listing_page(&[href.as_str()]),
            ));
        }

        let fetcher = CannedFetcher::new(pages);
        let collector = LinkCollector::new(&fetcher);
        let result = collector.collect_section("news", root).await;

        assert!(matches!(result, Err(Error::TooManyPages(_))));
        assert_eq!(fetcher.fetched().len(), MAX_PAGES);
    }

    #[tokio::test]
    async fn test_collect_all_deduplicates_in_discovery_order() {
        let news = "http://shamir.lv/category/news";
        let culture = "http://shamir.lv/category/culture";
        let fetcher = CannedFetcher::new(vec![
            (
                news.to_string(),
                listing_page(&["http://shamir.lv/a", "http://shamir.lv/shared"]),
            ),
            (
                culture.to_string(),
                listing_page(&["http://shamir.lv/shared", "http://shamir.lv/b"]),
            ),
        ]);

        let categories = vec![
            ("news".to_string(), news.to_string()),
            ("culture".to_string(), culture.to_string()),
        ];
        let collector = LinkCollector::new(&fetcher);
        let links = collector.collect_all(&categories).await.unwrap();

        assert_eq!(
            links,
            vec![
                "http://shamir.lv/a",
                "http://shamir.lv/shared",
                "http://shamir.lv/b"
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_category_root() {
        let fetcher = CannedFetcher::new(vec![]);
        let collector = LinkCollector::new(&fetcher);
        let result = collector.collect_section("broken", "not a url").await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
