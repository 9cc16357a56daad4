use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use hm_core::Result;

/// Append-only log of article URLs that failed extraction. Entries are
/// never deduplicated; reruns keep appending.
pub struct FailureLog {
    path: PathBuf,
}

impl FailureLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, url: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", url)?;
        Ok(())
    }

    pub fn read(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let log = FailureLog::new(dir.path().join("broken.txt"));

        log.append("http://shamir.lv/bad").unwrap();
        log.append("http://shamir.lv/bad").unwrap();

        assert_eq!(
            log.read().unwrap(),
            vec!["http://shamir.lv/bad", "http://shamir.lv/bad"]
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = FailureLog::new(dir.path().join("broken.txt"));
        assert!(log.read().unwrap().is_empty());
    }
}
