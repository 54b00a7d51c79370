// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_CITIES_DATABASE, DEFAULT_DATABASE, DEFAULT_DATA_DIR, DEFAULT_FEED_FILE,
    DEFAULT_FEED_INPUT, DEFAULT_INPUT_FILE, DEFAULT_JSON_JOBS, DEFAULT_LETTER_COUNT_CSV,
    DEFAULT_WORD_COUNT_CSV, DEFAULT_XML_JOBS,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for a feedstats run.
///
/// Every location the tool reads from or writes to is derived from this
/// struct. Relative paths are resolved against `data_dir`; absolute paths are
/// used as given.
///
/// # Fields
/// * `data_dir` - Base directory for relative paths (defaults to `data`)
/// * `persist` - Whether statistics are recorded in SQLite (defaults to true)
/// * `paths` - Optional per-file overrides
///
/// # Example
/// ```yaml
/// data_dir: /var/lib/feedstats
/// persist: true
/// paths:
///   input_file: homework.txt
///   word_count_csv: out/word-count.csv
///   database: /tmp/records.db
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_persist")]
    pub persist: bool,
    #[serde(default)]
    pub paths: PathsConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_persist() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            persist: default_persist(),
            paths: PathsConfig::default(),
        }
    }
}

/// Optional overrides for individual file locations.
///
/// Unset fields fall back to the constants in [`crate::config::consts`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PathsConfig {
    pub input_file: Option<PathBuf>,
    pub word_count_csv: Option<PathBuf>,
    pub letter_count_csv: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub json_jobs: Option<PathBuf>,
    pub xml_jobs: Option<PathBuf>,
    pub feed_file: Option<PathBuf>,
    pub feed_input: Option<PathBuf>,
    pub cities_database: Option<PathBuf>,
}

impl Config {
    /// Config rooted at `data_dir` with every other setting at its default.
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Resolve a path against `data_dir` unless it is already absolute.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    fn resolve_or(&self, configured: &Option<PathBuf>, fallback: &str) -> PathBuf {
        match configured {
            Some(path) => self.resolve(path),
            None => self.resolve(fallback),
        }
    }

    pub fn input_file(&self) -> PathBuf {
        self.resolve_or(&self.paths.input_file, DEFAULT_INPUT_FILE)
    }

    pub fn word_count_csv(&self) -> PathBuf {
        self.resolve_or(&self.paths.word_count_csv, DEFAULT_WORD_COUNT_CSV)
    }

    pub fn letter_count_csv(&self) -> PathBuf {
        self.resolve_or(&self.paths.letter_count_csv, DEFAULT_LETTER_COUNT_CSV)
    }

    pub fn database(&self) -> PathBuf {
        self.resolve_or(&self.paths.database, DEFAULT_DATABASE)
    }

    pub fn json_jobs(&self) -> PathBuf {
        self.resolve_or(&self.paths.json_jobs, DEFAULT_JSON_JOBS)
    }

    pub fn xml_jobs(&self) -> PathBuf {
        self.resolve_or(&self.paths.xml_jobs, DEFAULT_XML_JOBS)
    }

    pub fn feed_file(&self) -> PathBuf {
        self.resolve_or(&self.paths.feed_file, DEFAULT_FEED_FILE)
    }

    pub fn feed_input(&self) -> PathBuf {
        self.resolve_or(&self.paths.feed_input, DEFAULT_FEED_INPUT)
    }

    pub fn cities_database(&self) -> PathBuf {
        self.resolve_or(&self.paths.cities_database, DEFAULT_CITIES_DATABASE)
    }
}

/// Load a config file, picking the parser from the file extension.
///
/// `.yaml`/`.yml` go through `serde_yaml`, `.toml` through `toml` and
/// `.json` through `serde_json`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
data_dir: /srv/feedstats
paths:
  input_file: homework.txt
  database: /tmp/records.db
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/srv/feedstats"));
        assert!(cfg.persist);
        assert_eq!(cfg.input_file(), PathBuf::from("/srv/feedstats/homework.txt"));
        assert_eq!(cfg.database(), PathBuf::from("/tmp/records.db"));
    }

    #[test]
    fn test_defaults_resolve_against_data_dir() {
        let cfg = Config::default();

        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.word_count_csv(), PathBuf::from("data/word-count.csv"));
        assert_eq!(cfg.letter_count_csv(), PathBuf::from("data/letter-count.csv"));
        assert_eq!(cfg.json_jobs(), PathBuf::from("data/input.json"));
        assert_eq!(cfg.xml_jobs(), PathBuf::from("data/input.xml"));
        assert_eq!(cfg.cities_database(), PathBuf::from("data/city_coordinates.db"));
    }

    #[test]
    fn test_empty_yaml_document_uses_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_toml_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedstats.toml");
        std::fs::write(
            &path,
            "data_dir = \"work\"\npersist = false\n\n[paths]\nfeed_file = \"news.txt\"\n",
        )
        .unwrap();

        let cfg = load_config(&path).unwrap();
        assert!(!cfg.persist);
        assert_eq!(cfg.feed_file(), PathBuf::from("work/news.txt"));
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedstats.yaml");
        std::fs::write(&path, "data_dir: work\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.feed_input(), PathBuf::from("work/feed-input.txt"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedstats.ini");
        std::fs::write(&path, "data_dir=work").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config("/nonexistent/feedstats.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
