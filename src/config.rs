//! Client-wide configuration.

use std::time::Duration;

use ::config::{Config, Environment};
use serde::Deserialize;

use crate::error::{FileStationError, Result};

/// Default timeout for a single API call.
pub const DEFAULT_API_CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Prefix shared by all environment overrides.
pub const ENV_PREFIX: &str = "FILESTATION";

/// Environment variable overriding the API call timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "FILESTATION_TIMEOUT_SECS";

/// Environment variable disabling TLS certificate verification (`1` or `true`).
pub const ENV_INSECURE: &str = "FILESTATION_INSECURE";

/// Environment variable setting the `User-Agent` header.
pub const ENV_USER_AGENT: &str = "FILESTATION_USER_AGENT";

/// Advanced settings for the communication with the storage appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOptions {
    /// Upper bound for every request, including reading the body.
    pub api_call_timeout: Duration,
    /// Accept self-signed or otherwise invalid TLS certificates.
    ///
    /// Appliances ship with self-signed certificates, so this is often needed
    /// for `https://` hosts on a LAN.
    pub accept_invalid_certs: bool,
    /// Custom `User-Agent` header.
    pub user_agent: Option<String>,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            api_call_timeout: DEFAULT_API_CALL_TIMEOUT,
            accept_invalid_certs: false,
            user_agent: None,
        }
    }
}

impl ConfigOptions {
    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.api_call_timeout = timeout;
        self
    }

    /// Toggle TLS certificate verification.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build options from the defaults, overridden by `FILESTATION_TIMEOUT_SECS`,
    /// `FILESTATION_INSECURE` and `FILESTATION_USER_AGENT` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .try_parsing(true)
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let overlay: EnvOverlay = Config::builder()
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| FileStationError::InvalidArgument(format!("environment: {}", e)))?;

        let mut options = Self::default();

        if let Some(secs) = overlay.timeout_secs {
            if secs == 0 {
                return Err(FileStationError::InvalidArgument(format!(
                    "{} must be greater than zero",
                    ENV_TIMEOUT_SECS
                )));
            }
            options.api_call_timeout = Duration::from_secs(secs);
        }
        if let Some(insecure) = overlay.insecure {
            options.accept_invalid_certs = insecure;
        }
        if let Some(user_agent) = overlay.user_agent.filter(|ua| !ua.is_empty()) {
            options.user_agent = Some(user_agent);
        }

        Ok(options)
    }
}

/// Settings read from `FILESTATION_*` variables, keys lowercased without the prefix.
#[derive(Debug, Default, Deserialize)]
struct EnvOverlay {
    timeout_secs: Option<u64>,
    insecure: Option<bool>,
    user_agent: Option<String>,
}
