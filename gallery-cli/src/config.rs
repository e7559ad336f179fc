//! CLI configuration.
//!
//! Read from `config.json` in the platform config directory, or from an
//! explicit `--config` path. A missing default file means defaults.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use gallery_views::table::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, Pagination};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial rows per page.
    pub page_size: usize,
    /// Page sizes the user may switch to.
    pub page_size_options: Vec<usize>,
    /// Log level when no `-v` flag is given.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is None.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None => match paths::config_file() {
                Some(default) if default.exists() => Self::read(&default)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.page_size == 0 {
            return Err(CliError::Config("page_size must be greater than zero".into()));
        }
        if self.page_size_options.contains(&0) {
            return Err(CliError::Config("page_size_options must not contain 0".into()));
        }
        self.level_filter()?;
        Ok(())
    }

    /// Parsed log level.
    pub fn level_filter(&self) -> Result<LevelFilter, CliError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| CliError::Config(format!("unknown log level {:?}", self.log_level)))
    }

    /// Pagination for tables.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page_size).options(self.page_size_options.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_config(r#"{"page_size": 25}"#);
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.page_size_options, DEFAULT_PAGE_SIZE_OPTIONS.to_vec());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let file = write_config(r#"{"page_size": 0}"#);
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let file = write_config(r#"{"log_level": "loud"}"#);
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/gallery/config.json")));
        assert!(matches!(result, Err(CliError::Read { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_config("{page_size:");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(CliError::Json { .. })
        ));
    }
}
