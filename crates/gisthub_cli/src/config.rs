//! Layered CLI configuration.
//!
//! Sources are merged with later ones overriding earlier ones:
//! the XDG config file (`~/.config/gisthub/config.toml`), then a
//! `./gisthub.toml` next to the working directory, then `GISTHUB_`-prefixed
//! environment variables (e.g. `GISTHUB_GITHUB_TOKEN` for `github.token`).
//!
//! ```toml
//! [github]
//! token = "ghp_..."
//! # api_url = "https://github.example.com/api/v3"  # GitHub Enterprise
//!
//! [server]
//! # url = "..."  # companion service override
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Personal access token handed to the authenticated client.
    pub token: Option<String>,
    /// REST API base override, for GitHub Enterprise hosts.
    pub api_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Companion service base override.
    pub url: Option<String>,
}

impl Config {
    /// Merge all configuration sources; falls back to defaults on a broken
    /// config rather than refusing to start.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load configuration: {e}");
                Config::default()
            }
        }
    }

    fn try_load() -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let xdg_file = ProjectDirs::from("", "", "gisthub")
            .map(|dirs| dirs.config_dir().join("config.toml"));
        if let Some(path) = xdg_file.filter(|p| p.exists()) {
            tracing::debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let local = PathBuf::from("gisthub.toml");
        if local.exists() {
            tracing::debug!("reading ./gisthub.toml");
            builder = builder.add_source(File::from(local).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("GISTHUB")
                .separator("_")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn github_token(&self) -> Option<String> {
        self.github.token.clone()
    }
}
