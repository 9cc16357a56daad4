use std::fs;
use std::path::PathBuf;

use hm_core::Result;

/// The newline-delimited article URL list handed from the collector to
/// the extractor.
pub struct UrlList {
    path: PathBuf,
}

impl UrlList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn write(&self, urls: &[String]) -> Result<()> {
        let mut out = urls.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        fs::write(&self.path, out)?;
        Ok(())
    }

    pub fn read(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)?;
        Ok(text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }
}
