// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

fn default_keyword_limit() -> usize {
    30
}

fn default_fetch_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Scratch space for per-request PDF workspaces.
    pub workspace_path: PathBuf,
    /// Distinct keywords kept from a job posting.
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,
    /// Timeout for job-posting and photo fetches.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration based on environment
    pub fn load(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        Self::load_from_file(config_path, &environment)
    }

    fn get_environment() -> String {
        std::env::var("VITAE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(config_path: &Path, environment: &str) -> Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "{} not found. Server cannot start without configuration.",
                config_path.display()
            );
        }

        let config_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config_file: ConfigFile = serde_yaml::from_str(&config_content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self {
            workspace_path: Self::resolve_path(&env_config.workspace_path)?,
            ..env_config
        })
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    /// Ensure all configured directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.workspace_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to create directory: {}",
                    self.workspace_path.display()
                )
            })?;

        info!("All configured directories ensured to exist");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_settings() {
        let config: EnvironmentConfig =
            serde_yaml::from_str("workspace_path: /tmp/vitae").unwrap();
        assert_eq!(config.keyword_limit, 30);
        assert_eq!(config.fetch_timeout_secs, 5);
    }

    #[test]
    fn test_explicit_settings_override_defaults() {
        let yaml = "workspace_path: /tmp/vitae\nkeyword_limit: 10\nfetch_timeout_secs: 2\n";
        let config: EnvironmentConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.keyword_limit, 10);
        assert_eq!(config.fetch_timeout_secs, 2);
    }
}
