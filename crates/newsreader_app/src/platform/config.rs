use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use newsreader_engine::{FetchSettings, SearchQuery, DEFAULT_API_BASE, DEFAULT_REFRESH_PERIOD};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;
use super::{AppError, Cli};

const DEFAULT_LOG_FILE: &str = "./newsreader.log";

/// Runtime settings. Precedence: defaults < config file < command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base: String,
    pub refresh_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: u64,
    pub max_response_bytes: u64,
    /// Empty path disables logging.
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            refresh_secs: DEFAULT_REFRESH_PERIOD.as_secs(),
            request_timeout_secs: None,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            max_response_bytes: fetch.max_bytes,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn resolve(cli: &Cli) -> Result<Self, AppError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(api_base) = &cli.api_base {
            self.api_base = api_base.clone();
        }
        if let Some(secs) = cli.refresh_secs {
            self.refresh_secs = secs;
        }
        if let Some(secs) = cli.request_timeout_secs {
            self.request_timeout_secs = Some(secs);
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.refresh_secs == 0 {
            return Err(AppError::InvalidConfig(
                "refresh_secs must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.max_response_bytes == 0 {
            return Err(AppError::InvalidConfig(
                "max_response_bytes must be greater than zero".to_string(),
            ));
        }
        if newsreader_logging::parse_level(&self.log_level).is_none() {
            return Err(AppError::InvalidConfig(format!(
                "unknown log level {:?}",
                self.log_level
            )));
        }
        self.search_query()?;
        Ok(())
    }

    pub fn search_query(&self) -> Result<SearchQuery, AppError> {
        SearchQuery::new(&self.api_base).map_err(AppError::ApiBase)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_response_bytes,
            ..FetchSettings::default()
        }
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn log_level(&self) -> LevelFilter {
        newsreader_logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn log_destination(&self) -> LogDestination {
        if self.log_file.as_os_str().is_empty() {
            LogDestination::Disabled
        } else {
            LogDestination::File(self.log_file.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("newsreader.ron");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn defaults_match_front_page_contract() {
        let config = AppConfig::resolve(&Cli::default()).unwrap();

        assert_eq!(config.refresh_period(), Duration::from_millis(300_000));
        assert_eq!(config.fetch_settings().request_timeout, None);
        assert_eq!(
            config.search_query().unwrap().front_page().as_str(),
            "https://hn.algolia.com/api/v1/search?tags=front_page"
        );
    }

    #[test]
    fn file_values_fill_in_and_cli_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"(refresh_secs: 60, request_timeout_secs: Some(15), log_level: "debug")"#,
        );
        let cli = Cli {
            config: Some(path),
            refresh_secs: Some(120),
            ..Cli::default()
        };

        let config = AppConfig::resolve(&cli).unwrap();

        assert_eq!(config.refresh_secs, 120);
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn unparsable_file_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "(refresh_secs: \"soon\")");
        let cli = Cli {
            config: Some(path.clone()),
            ..Cli::default()
        };

        match AppConfig::resolve(&cli) {
            Err(AppError::ConfigParse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/definitely/not/here.ron")),
            ..Cli::default()
        };
        assert!(matches!(
            AppConfig::resolve(&cli),
            Err(AppError::ConfigRead { .. })
        ));
    }

    #[test]
    fn zero_refresh_and_bad_base_are_rejected() {
        let cli = Cli {
            refresh_secs: Some(0),
            ..Cli::default()
        };
        assert!(matches!(
            AppConfig::resolve(&cli),
            Err(AppError::InvalidConfig(_))
        ));

        let cli = Cli {
            api_base: Some("nope".to_string()),
            ..Cli::default()
        };
        assert!(matches!(AppConfig::resolve(&cli), Err(AppError::ApiBase(_))));
    }

    #[test]
    fn empty_log_file_disables_logging() {
        let config = AppConfig {
            log_file: PathBuf::new(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_destination(), LogDestination::Disabled);
    }
}
