//! Probe configuration
//!
//! Defaults can be kept in a TOML file so monitoring jobs only pass the host.
//! The file is read at `~/.config/nas-probe/config.toml` (XDG standard) or at
//! an explicit path; it is never written. Command-line flags win over file
//! values, which win over the built-in defaults.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::dns;
use crate::core::ports::Endpoint;

/// Default agent port
pub const DEFAULT_PORT: u16 = 161;
/// Default SNMPv2c community
pub const DEFAULT_COMMUNITY: &str = "public";
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Errors that make the probe unable to run
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("cannot parse {path}: {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying cause
        source: toml::de::Error,
    },

    /// No host was given
    #[error("host must not be empty")]
    EmptyHost,

    /// Timeout of zero seconds
    #[error("timeout must be at least one second")]
    ZeroTimeout,

    /// Name server is not `ip` or `ip:port`
    #[error("invalid dns server '{0}', expected ip or ip:port")]
    InvalidDns(String),
}

/// Values read from the config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Agent port
    pub port: Option<u16>,
    /// SNMPv2c community
    pub community: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Alternate name server, `ip` or `ip:port`
    pub dns: Option<String>,
    /// Service name in the output line
    pub service: Option<String>,
}

impl FileConfig {
    /// Default config file location
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nas-probe").join("config.toml"))
    }

    /// Load an explicitly requested file; it must exist and parse
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load the default file if there is one
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("loading config from {}", path.display());
                Self::load(&path)
            },
            _ => Ok(Self::default()),
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Target host
    pub host: String,
    /// Agent port
    pub port: Option<u16>,
    /// SNMPv2c community
    pub community: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Alternate name server
    pub dns: Option<String>,
    /// Service name
    pub service: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where to poll
    pub endpoint: Endpoint,
    /// Alternate name server, if any
    pub dns: Option<SocketAddr>,
    /// Service name in the output line
    pub service: String,
}

impl Settings {
    /// Merge flags over file values over defaults, then validate
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self, ConfigError> {
        let host = overrides.host.trim().to_string();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let timeout_secs =
            overrides.timeout_secs.or(file.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let dns = match overrides.dns.or(file.dns).filter(|d| !d.trim().is_empty()) {
            Some(value) => Some(
                dns::parse_server(value.trim()).ok_or(ConfigError::InvalidDns(value))?,
            ),
            None => None,
        };

        let service = overrides
            .service
            .or(file.service)
            .unwrap_or_else(|| default_service_name(&host));

        Ok(Self {
            endpoint: Endpoint {
                port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
                community: overrides
                    .community
                    .or(file.community)
                    .unwrap_or_else(|| DEFAULT_COMMUNITY.to_string()),
                timeout: Duration::from_secs(timeout_secs),
                host,
            },
            dns,
            service,
        })
    }
}

/// `SynologyNAS_<host>`
#[must_use]
pub fn default_service_name(host: &str) -> String {
    format!("SynologyNAS_{host}")
}
