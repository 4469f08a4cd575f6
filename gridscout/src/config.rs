use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::{SearchError, SearchResult};
use crate::input::DEFAULT_MAX_WORD_LEN;

/// Format of the written report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Grid rows followed by one `WORD (ROW,COL): DIRECTION` line per word
    #[default]
    Text,
    /// The same data as a JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SearchError::config_error(format!(
                "unknown output format {:?} (expected text or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Search settings.
///
/// # Configuration Locations
///
/// Loaded from, lowest precedence first:
/// 1. Global `$CONFIG_DIR/gridscout/config.yaml`
/// 2. Local `.gridscout.yaml` in the current directory
/// 3. A file given with `--config`
///
/// Command-line flags override all of them (see [`SearchConfig::merge_with_cli`]).
///
/// ```yaml
/// # Worker threads (default: CPU cores)
/// thread_count: 4
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
///
/// # Words this long or longer are ignored
/// max_word_len: 20
///
/// # text or json
/// output_format: "text"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of search workers
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Words with at least this many characters are dropped when loading
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,

    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_word_len() -> usize {
    DEFAULT_MAX_WORD_LEN
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            thread_count: default_thread_count(),
            log_level: default_log_level(),
            max_word_len: default_max_word_len(),
            output_format: OutputFormat::default(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub thread_count: Option<NonZeroUsize>,
    pub log_level: Option<String>,
    pub output_format: Option<OutputFormat>,
}

impl SearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> SearchResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration from the default locations plus an explicit file.
    ///
    /// The explicit file must exist; the default locations are optional.
    pub fn load_from(config_path: Option<&Path>) -> SearchResult<Self> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            dirs::config_dir().map(|p| p.join("gridscout/config.yaml")),
            Some(PathBuf::from(".gridscout.yaml")),
        ];
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the search cannot run with
    pub fn validate(&self) -> SearchResult<()> {
        if self.max_word_len == 0 {
            return Err(SearchError::config_error("max_word_len must be at least 1"));
        }
        Ok(())
    }

    /// Applies command-line values over file values
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(threads) = cli.thread_count {
            self.thread_count = threads;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(format) = cli.output_format {
            self.output_format = format;
        }
        self
    }

    /// Builder method to set the number of workers
    pub fn with_thread_count(mut self, count: NonZeroUsize) -> Self {
        self.thread_count = count;
        self
    }

    /// Builder method to set the word length cutoff
    pub fn with_max_word_len(mut self, len: usize) -> Self {
        self.max_word_len = len;
        self
    }

    /// Builder method to set the report format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
