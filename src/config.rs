use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use anyhow::{Context, Result};

use crate::adapters::outbound::{DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR};
use crate::domains::arena::{DEFAULT_SCENE_COUNT, DEFAULT_SEED};

pub const ENV_COUNT: &str = "ARENA_FIXTURES_COUNT";
pub const ENV_SEED: &str = "ARENA_FIXTURES_SEED";
pub const ENV_OUT_DIR: &str = "ARENA_FIXTURES_OUT_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub file_prefix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file written through fast_log in addition to the console.
    pub file: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { count: DEFAULT_SCENE_COUNT, seed: DEFAULT_SEED }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise the defaults; then applies
    /// environment overrides.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path)
                .await
                .with_context(|| format!("failed to load config {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(v) = env::var(ENV_COUNT) {
            self.generator.count =
                v.trim().parse().with_context(|| format!("invalid {}: {}", ENV_COUNT, v))?;
        }
        if let Ok(v) = env::var(ENV_SEED) {
            self.generator.seed =
                v.trim().parse().with_context(|| format!("invalid {}: {}", ENV_SEED, v))?;
        }
        if let Ok(v) = env::var(ENV_OUT_DIR) {
            self.output.directory = v;
        }
        Ok(())
    }
}
