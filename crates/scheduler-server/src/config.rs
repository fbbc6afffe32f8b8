//! Server configuration.
//!
//! Values are layered with the following priority (highest first):
//! 1. Command-line flags
//! 2. Environment variables prefixed with `TODO_` (`TODO_PORT`, `TODO_DBFILE`, ...)
//! 3. Configuration file (`.scheduler.yml` by default; `.toml` files are read as TOML)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};

use clap::Parser;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = ".scheduler.yml";
pub const ENV_PREFIX: &str = "TODO_";

#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] figment::Error);

/// Personal task scheduler server
#[derive(Parser, Debug, Default, Serialize)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML, or TOML when the name ends in `.toml`)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    #[serde(skip)]
    pub config: PathBuf,
    /// Address to bind to
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Server port
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// SQLite database file name
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbfile: Option<String>,
    /// Directory with the static web front-end
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_dir: Option<PathBuf>,
    /// Log level filter (trace, debug, info, warn, error); `RUST_LOG` wins when set
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dbfile: String,
    pub web_dir: PathBuf,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7540,
            dbfile: "scheduler.db".to_string(),
            web_dir: PathBuf::from("./web"),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(layered(cli, ENV_PREFIX).extract()?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn layered(cli: &Cli, env_prefix: &str) -> Figment {
    Figment::from(Serialized::defaults(ServerConfig::default()))
        .merge(config_file(&cli.config))
        .merge(Env::prefixed(env_prefix))
        .merge(Serialized::defaults(cli))
}

fn config_file(path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Figment::from(Toml::file(path)),
        _ => Figment::from(Yaml::file(path)),
    }
}
