//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::replies::DEFAULT_BOT_NAME;
use crate::responder::Responder;

/// Env var that replaces the configured bot name.
pub const NAME_ENV_VAR: &str = "SIMPLEBOT_NAME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bot name interpolated into the greeting and self-introduction
    #[serde(default = "default_name")]
    pub name: String,

    /// Additional trigger → reply pairs merged over the built-in table
    #[serde(default)]
    pub extra_replies: BTreeMap<String, String>,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_name() -> String {
    DEFAULT_BOT_NAME.into()
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Like `load`, but a missing path means defaults (env overrides still apply).
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return Self::load(config_path);
        }
        Self::default_with_env(|key| std::env::var(key).ok())
    }

    fn load_with_env(config_path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    fn default_with_env(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default location (dir/config.yaml)
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load(&dir.join("config.yaml"))
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(name) = env(NAME_ENV_VAR) {
            self.name = name;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Bot name must not be empty (config.yaml `name` or {NAME_ENV_VAR})");
        }
        Ok(())
    }

    /// Build the responder described by this config.
    pub fn build_responder(&self) -> Responder {
        let mut responder = Responder::new(&self.name);
        responder.extend(&self.extra_replies);
        responder
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            extra_replies: BTreeMap::new(),
            log_file: None,
        }
    }
}
