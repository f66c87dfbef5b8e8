//! Configuration file support for repometa.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. Environment variables (prefixed with `REPOMETA_`, e.g., `REPOMETA_GITHUB_TOKEN`)
//! 2. Config file (~/.config/repometa/config.toml or ./repometa.toml)
//!
//! Example config file:
//! ```toml
//! [github]
//! token = "ghp_..."  # or use REPOMETA_GITHUB_TOKEN env var
//! ```

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub API token.
    /// Can also be set via REPOMETA_GITHUB_TOKEN environment variable.
    pub token: Option<String>,
}

/// Load configuration from the config file and environment.
///
/// Missing or unreadable configuration falls back to defaults; the token is
/// optional everywhere.
pub fn load() -> Config {
    let mut builder = ConfigBuilder::builder();

    if let Some(dirs) = ProjectDirs::from("", "", "repometa") {
        let path = dirs.config_dir().join("config.toml");
        builder = builder.add_source(
            File::from(path).format(FileFormat::Toml).required(false),
        );
    }
    builder = builder.add_source(
        File::with_name("repometa.toml")
            .format(FileFormat::Toml)
            .required(false),
    );

    builder = builder.add_source(Environment::with_prefix("REPOMETA").separator("_"));

    builder
        .build()
        .and_then(|c| c.try_deserialize())
        .unwrap_or_default()
}
