//! Server configuration.
//!
//! Loads configuration from a TOML file with support for environment variable
//! expansion in string values. Variables use `$VAR` or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8787
//! include_known_chains = true
//!
//! [[chains]]
//! id = 31337
//! name = "Anvil"
//! nativeCurrency = { name = "Ether", symbol = "ETH", decimals = 18 }
//! rpcUrls.default.http = ["${ANVIL_RPC_URL}"]
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` — Path to configuration file (default: `config.toml`)
//! - `HOST` — Override server bind address
//! - `PORT` — Override server port
//! - Any variable referenced by `$VAR` in the config file

use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use coinchain::{ChainInfo, ChainRegistry};
use serde::{Deserialize, Serialize};

/// Command-line arguments.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "coinchain-server", version, about)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, env = "CONFIG", default_value = "config.toml")]
    pub config: PathBuf,

    /// Bind address, overriding the configuration file.
    #[arg(long, env = "HOST")]
    pub host: Option<IpAddr>,

    /// Port, overriding the configuration file.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (default: `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Server port (default: `8787`).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether the built-in chain table is served (default: `true`).
    #[serde(default = "default_include_known_chains")]
    pub include_known_chains: bool,

    /// Additional chains. Entries replace built-in chains with the same ID.
    #[serde(default)]
    pub chains: Vec<ChainInfo>,
}

const fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

const fn default_port() -> u16 {
    8787
}

const fn default_include_known_chains() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            include_known_chains: default_include_known_chains(),
            chains: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the file named on the command line and applies
    /// the `--host` / `--port` overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&cli.config)?;
        if let Some(host) = cli.host {
            config.host = host;
        }
        if let Some(port) = cli.port {
            config.port = port;
        }
        Ok(config)
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text, expanding environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not a valid configuration.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(&expand_env_vars(content))?)
    }

    /// Builds the chain registry described by this configuration.
    #[must_use]
    pub fn registry(&self) -> ChainRegistry {
        let base = if self.include_known_chains {
            ChainRegistry::known()
        } else {
            ChainRegistry::new()
        };
        base.with_chains(self.chains.clone())
    }
}

/// Expands `$VAR` and `${VAR}` patterns in a string from environment variables.
///
/// Unresolved variables are left as-is.
fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, raw_len) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        let raw = &rest[pos..=pos + raw_len];
        match std::env::var(name) {
            Ok(value) if !name.is_empty() => result.push_str(&value),
            _ => result.push_str(raw),
        }
        rest = &rest[pos + 1 + raw_len..];
    }

    result.push_str(rest);
    result
}
