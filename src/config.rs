use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

pub const DEFAULT_LOG_FILTER: &str = "info";

pub const DEFAULT_MAX_INPUT_BYTES: u64 = 1024 * 1024;

pub const MAXIMUM_INPUT_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct Config {
    #[validate(nested)]
    pub log: LogConfig,
    #[validate(nested)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[validate(length(min = 1))]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct InputConfig {
    #[validate(range(min = 1, max = MAXIMUM_INPUT_BYTES))]
    pub max_bytes: u64,
    pub trim_newline: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_INPUT_BYTES,
            trim_newline: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, anyhow::Error> {
        let config: Config = toml::from_str(raw).context("invalid config toml")?;
        config.validate().context("invalid config values")?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}

impl InputConfig {
    /// Drops one trailing `\n` or `\r\n` when enabled.
    pub fn prepare<'a>(&self, raw: &'a str) -> &'a str {
        if !self.trim_newline {
            return raw;
        }
        raw.strip_suffix("\r\n")
            .or_else(|| raw.strip_suffix('\n'))
            .unwrap_or(raw)
    }

    pub fn check_len(&self, raw: &str) -> Result<(), anyhow::Error> {
        let len = raw.len() as u64;
        if len > self.max_bytes {
            anyhow::bail!("input is {} bytes, limit is {}", len, self.max_bytes);
        }
        Ok(())
    }
}
