use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use hm_core::config::default_categories;
use hm_core::{MigrateConfig, Result};
use hm_render::Renderer;
use hm_scraper::{ArticleExtractor, HttpFetcher, LinkCollector};
use hm_store::{FailureLog, RecordStore, UrlList};

#[derive(Parser, Debug)]
#[command(author, version, about = "One-shot migration of a Herald-theme blog to markdown", long_about = None)]
struct Cli {
    /// Newline-delimited article URL list produced by `collect`
    #[arg(long, default_value = "urls.txt")]
    urls: PathBuf,
    /// CSV record store produced by `extract`
    #[arg(long, default_value = "posts.csv")]
    records: PathBuf,
    /// Append-only log of URLs that failed extraction
    #[arg(long, default_value = "broken.txt")]
    failures: PathBuf,
    /// Directory the rendered markdown files land in
    #[arg(long, default_value = "articles")]
    out_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk every category listing and write the article URL list
    Collect,
    /// Fetch each collected URL and build the CSV record store
    Extract,
    /// Render every stored record to a markdown file with front matter
    Render,
    /// Run all three stages in order
    Run,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = MigrateConfig {
        categories: default_categories(),
        url_list: cli.urls,
        records: cli.records,
        failure_log: cli.failures,
        out_dir: cli.out_dir,
    };

    match cli.command {
        Commands::Collect => collect(&config).await?,
        Commands::Extract => extract(&config).await?,
        Commands::Render => render(&config)?,
        Commands::Run => {
            collect(&config).await?;
            extract(&config).await?;
            render(&config)?;
        }
    }
    Ok(())
}

async fn collect(config: &MigrateConfig) -> Result<()> {
    let fetcher = HttpFetcher;
    let collector = LinkCollector::new(&fetcher);
    let links = collector.collect_all(&config.categories).await?;
    UrlList::new(&config.url_list).write(&links)?;
    info!("🔗 {} article links collected", links.len());
    Ok(())
}

async fn extract(config: &MigrateConfig) -> Result<()> {
    let urls = UrlList::new(&config.url_list).read()?;
    let fetcher = HttpFetcher;
    let extractor = ArticleExtractor::new(&fetcher);
    let failures = FailureLog::new(&config.failure_log);
    let posts = extractor.extract_all(&urls, &failures).await?;
    RecordStore::new(&config.records).write(&posts)?;
    info!("📰 {} of {} articles extracted", posts.len(), urls.len());
    Ok(())
}

fn render(config: &MigrateConfig) -> Result<()> {
    let rows = RecordStore::new(&config.records).read()?;
    let renderer = Renderer::new(&config.out_dir);
    renderer.render_all(&rows)?;
    info!(
        "✨ {} markdown files written to {}",
        rows.len(),
        config.out_dir.display()
    );
    Ok(())
}
