use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use hm_core::Result;
use hm_store::PostRow;

use crate::date::parse_date;
use crate::markdown::clean;

/// Front-matter bracket coercion for tag cells that predate the native
/// list rendering: `('a', 'b')` becomes `['a', 'b']`. Cells already in
/// list form pass through unchanged.
pub fn join_tags(tags: &str) -> String {
    tags.replace('(', "[").replace(')', "]")
}

/// Filesystem-safe name from a title: lowercased, runs of anything
/// non-alphanumeric collapsed to single hyphens, ends trimmed. Titles
/// that normalize identically overwrite each other, last write wins.
pub fn slug(title: &str) -> String {
    let mut out = String::new();
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// The rendered document: fixed-order front matter, a blank line, the
/// cleaned body, and a trailing space before end of file.
fn render_document(row: &PostRow) -> Result<String> {
    Ok(format!(
        "---\nid: \"{}\"\ntitle: \"{}\"\nimage: \"{}\"\ntags: {}\ndate: {}\noldUrl: {}\n---\n\n{} ",
        row.id,
        row.title,
        row.image,
        join_tags(&row.tags),
        parse_date(&row.date)?,
        row.url,
        clean(&row.body),
    ))
}

/// Writes one markdown file per record under the output directory,
/// rotating any previous run's output aside first.
pub struct Renderer {
    out_dir: PathBuf,
}

impl Renderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Moves an existing output directory to the first free `<dir>.bakN`
    /// sibling, then recreates it empty. A missing directory is the
    /// first-run steady state, not an error.
    pub fn rotate(&self) -> Result<()> {
        if self.out_dir.exists() {
            let mut n = 1;
            loop {
                let backup = backup_path(&self.out_dir, n);
                if !backup.exists() {
                    fs::rename(&self.out_dir, &backup)?;
                    break;
                }
                n += 1;
            }
        }
        fs::create_dir_all(&self.out_dir)?;
        Ok(())
    }

    pub fn render(&self, row: &PostRow) -> Result<PathBuf> {
        info!("{}", row.title);
        let path = self.out_dir.join(format!("{}.md", slug(&row.title)));
        fs::write(&path, render_document(row)?)?;
        Ok(path)
    }

    pub fn render_all(&self, rows: &[PostRow]) -> Result<()> {
        self.rotate()?;
        for row in rows {
            self.render(row)?;
        }
        Ok(())
    }
}

fn backup_path(dir: &Path, n: u32) -> PathBuf {
    let mut name = dir.as_os_str().to_os_string();
    name.push(format!(".bak{}", n));
    PathBuf::from(name)
}
