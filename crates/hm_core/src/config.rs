use std::path::PathBuf;

/// Everything the pipeline stages need to know, threaded explicitly into
/// each stage instead of read from ambient globals.
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    /// Category roots to crawl, `(section name, listing URL)` in order.
    pub categories: Vec<(String, String)>,
    /// Newline-delimited article URL list, collector output.
    pub url_list: PathBuf,
    /// CSV record store, extractor output.
    pub records: PathBuf,
    /// Append-only log of URLs that failed extraction.
    pub failure_log: PathBuf,
    /// Directory the rendered markdown files land in.
    pub out_dir: PathBuf,
}

/// Category roots on the legacy site, insertion order preserved. The
/// section names are progress labels; the URLs are the crawl entry points.
pub fn default_categories() -> Vec<(String, String)> {
    [
        ("researches", "http://shamir.lv/category/%D0%B8%D1%81%D1%81%D0%BB%D0%B5%D0%B4%D0%BE%D0%B2%D0%B0%D0%BD%D0%B8%D1%8F"),
        ("activity", "http://shamir.lv/category/kuljtura"),
        ("projects", "http://shamir.lv/category/kuljtura/%D0%BF%D1%80%D0%BE%D0%B5%D0%BA%D1%82%D1%8B"),
        ("years", "http://shamir.lv/category/kuljtura/%D0%BF%D1%80%D0%BE%D0%B5%D0%BA%D1%82%D1%8B/450-%D0%BB%D0%B5%D1%82-%D0%B2%D0%BC%D0%B5%D1%81%D1%82%D0%B5-%D0%B5%D0%B2%D1%80%D0%B5%D0%B9%D1%81%D0%BA%D0%B0%D1%8F-%D0%BA%D1%83%D0%BB%D1%8C%D1%82%D1%83%D1%80%D0%B0-%D0%B2-%D0%BB%D0%B0%D1%82%D0%B2"),
        ("teaching", "http://shamir.lv/category/kuljtura/%D0%BF%D1%80%D0%BE%D0%B5%D0%BA%D1%82%D1%8B/%D0%BF%D1%80%D0%B5%D0%BF%D0%BE%D0%B4%D0%B0%D0%B2%D0%B0%D0%BD%D0%B8%D0%B5-%D0%B8%D1%81%D1%82%D0%BE%D1%80%D0%B8%D0%B8-%D1%85%D0%BE%D0%BB%D0%BE%D0%BA%D0%BE%D1%81%D1%82%D0%B0"),
        ("festivals", "http://shamir.lv/category/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D0%B8"),
        ("fest_5770", "http://shamir.lv/category/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D0%B8/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D1%8C-%D0%B5%D0%B2%D1%80%D0%B5%D0%B9%D1%81%D0%BA%D0%BE%D0%B9-%D0%BA%D1%83%D0%BB%D1%8C%D1%82%D1%83%D1%80%D1%8B-5770"),
        ("fest_5771", "http://shamir.lv/category/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D0%B8/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D1%8C-%D0%B5%D0%B2%D1%80%D0%B5%D0%B9%D1%81%D0%BA%D0%BE%D0%B9-%D0%BA%D1%83%D0%BB%D1%8C%D1%82%D1%83%D1%80%D1%8B-5771"),
        ("fest_5772", "http://shamir.lv/category/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D0%B8/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D1%8C-%D0%B5%D0%B2%D1%80%D0%B5%D0%B9%D1%81%D0%BA%D0%BE%D0%B9-%D0%BA%D1%83%D0%BB%D1%8C%D1%82%D1%83%D1%80%D1%8B-5772"),
        ("fest_5773", "http://shamir.lv/category/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D0%B8/%D1%84%D0%B5%D1%81%D1%82%D0%B8%D0%B2%D0%B0%D0%BB%D1%8C-%D0%B5%D0%B2%D1%80%D0%B5%D0%B9%D1%81%D0%BA%D0%BE%D0%B9-%D0%BA%D1%83%D0%BB%D1%8C%D1%82%D1%83%D1%80%D1%8B-5773"),
        ("concerts", "http://shamir.lv/category/%D0%BA%D0%BE%D0%BD%D1%86%D0%B5%D1%80%D1%82%D1%8B"),
        ("conferences", "http://shamir.lv/category/%D0%BA%D0%BE%D0%BD%D1%84%D0%B5%D1%80%D0%B5%D0%BD%D1%86%D0%B8%D0%B8"),
    ]
    .into_iter()
    .map(|(name, url)| (name.to_string(), url.to_string()))
    .collect()
}
