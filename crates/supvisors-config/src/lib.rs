//! Shared configuration for the Supvisors client.
//!
//! Configuration is layered by `ortho_config`: built-in defaults, then any
//! configuration file (`--config-path` or `SUPVISORS_CONFIG_PATH`), then
//! `SUPVISORS_*` environment variables, then command-line flags.

use serde::{Deserialize, Serialize};

mod defaults;
mod endpoint;

pub use defaults::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT, default_connect_timeout_secs,
    default_endpoint,
};
pub use endpoint::{DEFAULT_RPC_PATH, EndpointParseError, RpcEndpoint, Scheme};

/// Client configuration resolved from every supported source.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, ortho_config::OrthoConfig)]
#[ortho_config(prefix = "SUPVISORS")]
pub struct Config {
    /// XML-RPC endpoint of the supervisor to drive.
    #[serde(default = "default_endpoint")]
    pub endpoint: RpcEndpoint,
    /// User name for HTTP basic authentication, when the supervisor requires it.
    #[serde(default)]
    pub username: Option<String>,
    /// Password for HTTP basic authentication.
    #[serde(default)]
    pub password: Option<String>,
    /// Timeout for establishing the HTTP connection, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            username: None,
            password: None,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Endpoint of the supervisor XML-RPC interface.
    #[must_use]
    pub const fn endpoint(&self) -> &RpcEndpoint {
        &self.endpoint
    }

    /// Basic authentication credentials, present only when both parts are set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }

    /// Connection timeout as a [`std::time::Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.connect_timeout_secs)
    }
}
