//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SCHOLAR_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{DEFAULT_PROVIDER_TIMEOUT, DEFAULT_STORE_TIMEOUT};
use crate::embedding::HttpEmbeddingConfig;
use crate::embedding::http::DEFAULT_EMBEDDING_MODEL;
use crate::lifecycle::{DEFAULT_LIFECYCLE_QUEUE, LifecycleConfig};
use crate::ranking::RankingConfig;

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SCHOLAR_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON array of catalog entities. Default: `./data/scholarships.json`.
    pub catalog_path: PathBuf,

    /// JSON array of embedding records. Default: `./data/embeddings.json`.
    pub embeddings_path: PathBuf,

    /// Base URL of an OpenAI-compatible embeddings API. `None` runs the offline
    /// hashing embedder (stub mode).
    pub embedding_url: Option<String>,

    /// Model name sent to the embeddings API.
    pub embedding_model: String,

    pub embedding_api_key: Option<String>,

    /// Bound on one embedding call. Default: 10s.
    pub embedding_timeout: Duration,

    /// Bound on one embedding store read during ranking. Default: 2s.
    pub store_timeout: Duration,

    /// Capacity of the lifecycle task queue. Default: `256`.
    pub lifecycle_queue: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("./data/scholarships.json"),
            embeddings_path: PathBuf::from("./data/embeddings.json"),
            embedding_url: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_api_key: None,
            embedding_timeout: DEFAULT_PROVIDER_TIMEOUT,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            lifecycle_queue: DEFAULT_LIFECYCLE_QUEUE,
        }
    }
}

impl Config {
    const ENV_CATALOG_PATH: &'static str = "SCHOLAR_CATALOG_PATH";
    const ENV_EMBEDDINGS_PATH: &'static str = "SCHOLAR_EMBEDDINGS_PATH";
    const ENV_EMBEDDING_URL: &'static str = "SCHOLAR_EMBEDDING_URL";
    const ENV_EMBEDDING_MODEL: &'static str = "SCHOLAR_EMBEDDING_MODEL";
    const ENV_EMBEDDING_API_KEY: &'static str = "SCHOLAR_EMBEDDING_API_KEY";
    const ENV_EMBEDDING_TIMEOUT_MS: &'static str = "SCHOLAR_EMBEDDING_TIMEOUT_MS";
    const ENV_STORE_TIMEOUT_MS: &'static str = "SCHOLAR_STORE_TIMEOUT_MS";
    const ENV_LIFECYCLE_QUEUE: &'static str = "SCHOLAR_LIFECYCLE_QUEUE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_path = Self::parse_path_from_env(Self::ENV_CATALOG_PATH, defaults.catalog_path);
        let embeddings_path =
            Self::parse_path_from_env(Self::ENV_EMBEDDINGS_PATH, defaults.embeddings_path);
        let embedding_url = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_URL);
        let embedding_model = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_MODEL)
            .unwrap_or(defaults.embedding_model);
        let embedding_api_key = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_API_KEY);
        let embedding_timeout = Self::parse_millis_from_env(
            Self::ENV_EMBEDDING_TIMEOUT_MS,
            defaults.embedding_timeout,
        )?;
        let store_timeout =
            Self::parse_millis_from_env(Self::ENV_STORE_TIMEOUT_MS, defaults.store_timeout)?;
        let lifecycle_queue = Self::parse_positive_from_env(
            Self::ENV_LIFECYCLE_QUEUE,
            defaults.lifecycle_queue as u64,
        )? as usize;

        Ok(Self {
            catalog_path,
            embeddings_path,
            embedding_url,
            embedding_model,
            embedding_api_key,
            embedding_timeout,
            store_timeout,
            lifecycle_queue,
        })
    }

    /// Validates paths and values (does not create files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_file_path(&self.catalog_path)?;
        Self::validate_file_path(&self.embeddings_path)?;

        if let Some(ref url) = self.embedding_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl { value: url.clone() });
            }
        }

        if self.embedding_timeout.is_zero() {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_EMBEDDING_TIMEOUT_MS,
            });
        }
        if self.store_timeout.is_zero() {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_STORE_TIMEOUT_MS,
            });
        }
        if self.lifecycle_queue == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_LIFECYCLE_QUEUE,
            });
        }

        Ok(())
    }

    /// `true` when no embeddings endpoint is configured.
    pub fn is_stub_mode(&self) -> bool {
        self.embedding_url.is_none()
    }

    /// HTTP provider settings, or `None` in stub mode.
    pub fn embedding_config(&self) -> Option<HttpEmbeddingConfig> {
        self.embedding_url.as_ref().map(|url| HttpEmbeddingConfig {
            base_url: url.clone(),
            model: self.embedding_model.clone(),
            api_key: self.embedding_api_key.clone(),
            timeout: self.embedding_timeout,
        })
    }

    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig {
            provider_timeout: self.embedding_timeout,
            store_timeout: self.store_timeout,
        }
    }

    pub fn lifecycle_config(&self) -> LifecycleConfig {
        LifecycleConfig::default()
            .with_queue_capacity(self.lifecycle_queue)
            .with_provider_timeout(self.embedding_timeout)
    }

    fn validate_file_path(path: &Path) -> Result<(), ConfigError> {
        if path.exists() && !path.is_file() {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        Self::parse_optional_string_from_env(var_name)
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_millis_from_env(
        var_name: &'static str,
        default: Duration,
    ) -> Result<Duration, ConfigError> {
        let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
        Self::parse_positive_from_env(var_name, default_ms).map(Duration::from_millis)
    }

    fn parse_positive_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        let Some(value) = Self::parse_optional_string_from_env(var_name) else {
            return Ok(default);
        };

        let parsed: u64 = value.parse().map_err(|e| ConfigError::NumberParseError {
            name: var_name,
            value: value.clone(),
            source: e,
        })?;

        if parsed == 0 {
            return Err(ConfigError::ZeroValue { name: var_name });
        }

        Ok(parsed)
    }
}
