use async_trait::async_trait;

use hm_core::Result;

/// Page access behind a seam so the structural lookups can run against
/// canned HTML in tests.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain HTTP GET, default redirect handling, no custom headers.
pub struct HttpFetcher;

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = reqwest::get(url).await?;
        Ok(response.text().await?)
    }
}
