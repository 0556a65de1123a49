// src/dictionary/mod.rs
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("{0} not found")]
    NotFound(PathBuf),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DictionaryError>;

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
        _ => DictionaryError::Io { path: path.to_path_buf(), source: e },
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Reads a common-password file. Entries are lowercased.
pub fn try_load_set(path: &Path) -> Result<HashSet<String>> {
    Ok(read_lines(path)?
        .into_iter()
        .map(|line| line.to_lowercase())
        .collect())
}

pub fn try_load_list(path: &Path) -> Result<Vec<String>> {
    read_lines(path)
}

/// Like [`try_load_set`], but a missing or unreadable file yields an empty set.
pub fn load_set(path: &Path) -> HashSet<String> {
    try_load_set(path).unwrap_or_else(|e| {
        log::warn!("Error: {}. Continuing with an empty set.", e);
        HashSet::new()
    })
}

/// Like [`try_load_list`], but a missing or unreadable file yields an empty list.
pub fn load_list(path: &Path) -> Vec<String> {
    try_load_list(path).unwrap_or_else(|e| {
        log::warn!("Error: {}. Continuing with an empty list.", e);
        Vec::new()
    })
}

/// Word sources loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    pub common_passwords: Arc<HashSet<String>>,
    pub words: Arc<Vec<String>>,
}

impl Dictionaries {
    pub fn load(config: &Config) -> Self {
        let common_passwords = load_set(&config.common_passwords_path);
        let words = load_list(&config.word_list_path);

        log::info!(
            "Loaded {} common passwords and {} dictionary words",
            common_passwords.len(),
            words.len()
        );

        Self {
            common_passwords: Arc::new(common_passwords),
            words: Arc::new(words),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(file, "{}", line).expect("Failed to write");
        }
        file
    }

    #[test]
    fn set_is_lowercased_and_trimmed() {
        let file = file_with(&["Password", "  123456  ", "", "QWERTY"]);
        let set = load_set(file.path());
        assert_eq!(set.len(), 3);
        assert!(set.contains("password"));
        assert!(set.contains("123456"));
        assert!(set.contains("qwerty"));
    }

    #[test]
    fn list_keeps_order_and_case() {
        let file = file_with(&["Apple", "banana", "", "Cherry"]);
        assert_eq!(load_list(file.path()), vec!["Apple", "banana", "Cherry"]);
    }

    #[test]
    fn missing_file_is_reported_by_strict_loaders() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nope.txt");
        assert!(matches!(try_load_set(&path), Err(DictionaryError::NotFound(_))));
        assert!(matches!(try_load_list(&path), Err(DictionaryError::NotFound(_))));
    }

    #[test]
    fn missing_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nope.txt");
        assert!(load_set(&path).is_empty());
        assert!(load_list(&path).is_empty());
    }

    #[test]
    fn load_uses_config_paths() {
        let common = file_with(&["letmein"]);
        let words = file_with(&["river", "castle"]);
        let config = Config {
            common_passwords_path: common.path().to_path_buf(),
            word_list_path: words.path().to_path_buf(),
            ..Config::default()
        };

        let dicts = Dictionaries::load(&config);
        assert!(dicts.common_passwords.contains("letmein"));
        assert_eq!(dicts.words.as_slice(), ["river", "castle"]);
    }
}
