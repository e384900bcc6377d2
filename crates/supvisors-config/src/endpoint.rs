use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;
use url::Url;

/// Path Supervisor serves its XML-RPC interface on.
pub const DEFAULT_RPC_PATH: &str = "/RPC2";

/// URL scheme accepted for the XML-RPC interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    Https,
}

impl Scheme {
    /// Port used when the endpoint does not name one.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

/// Location of the supervisor's XML-RPC interface.
///
/// Only `http` and `https` URLs naming a host are accepted. When the URL has
/// no path the Supervisor default of `/RPC2` is applied.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct RpcEndpoint {
    scheme: Scheme,
    host: String,
    port: Option<u16>,
    path: String,
}

impl RpcEndpoint {
    /// Builds an HTTP endpoint for the given host and port on `/RPC2`.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointParseError`] when `host` does not form a valid URL.
    pub fn http(host: &str, port: u16) -> Result<Self, EndpointParseError> {
        format!("http://{host}:{port}{DEFAULT_RPC_PATH}").parse()
    }

    /// Plain HTTP endpoint on `/RPC2` from parts already known to be valid.
    pub(crate) fn from_trusted_parts(host: &str, port: u16) -> Self {
        Self {
            scheme: Scheme::Http,
            host: host.to_owned(),
            port: Some(port),
            path: DEFAULT_RPC_PATH.to_owned(),
        }
    }

    /// Scheme of the endpoint.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Host part of the endpoint.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port of the endpoint, falling back to the scheme default.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.scheme.default_port())
    }

    /// Path requests are posted to.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RpcEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(formatter, ":{port}")?;
        }
        formatter.write_str(&self.path)
    }
}

impl FromStr for RpcEndpoint {
    type Err = EndpointParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(input)?;
        let scheme = url
            .scheme()
            .parse::<Scheme>()
            .map_err(|_| EndpointParseError::UnsupportedScheme(url.scheme().to_owned()))?;
        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_owned(),
            _ => return Err(EndpointParseError::MissingHost(input.to_owned())),
        };
        let path = match url.path() {
            "" | "/" => DEFAULT_RPC_PATH.to_owned(),
            other => other.to_owned(),
        };
        Ok(Self {
            scheme,
            host,
            port: url.port(),
            path,
        })
    }
}

impl TryFrom<String> for RpcEndpoint {
    type Error = EndpointParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RpcEndpoint> for String {
    fn from(endpoint: RpcEndpoint) -> Self {
        endpoint.to_string()
    }
}

/// Errors encountered while parsing an [`RpcEndpoint`] from text.
#[derive(Debug, Error)]
pub enum EndpointParseError {
    /// Scheme was not `http` or `https`.
    #[error("unsupported endpoint scheme '{0}'")]
    UnsupportedScheme(String),
    /// Host name was missing.
    #[error("missing host in '{0}'")]
    MissingHost(String),
    /// URL failed to parse.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn display_keeps_explicit_path() {
        let endpoint: RpcEndpoint = "http://cliche81:60000/RPC2".parse().expect("valid endpoint");
        assert_eq!(endpoint.to_string(), "http://cliche81:60000/RPC2");
    }

    #[rstest]
    #[case("http://localhost:60000")]
    #[case("http://localhost:60000/")]
    fn applies_default_rpc_path(#[case] input: &str) {
        let endpoint: RpcEndpoint = input.parse().expect("valid endpoint");
        assert_eq!(endpoint.path(), DEFAULT_RPC_PATH);
        assert_eq!(endpoint.to_string(), "http://localhost:60000/RPC2");
    }

    #[rstest]
    fn http_constructor_matches_parsed_form() {
        let built = RpcEndpoint::http("10.0.0.4", 61000).expect("valid endpoint");
        assert_eq!(built.host(), "10.0.0.4");
        assert_eq!(built.port(), 61000);
        assert_eq!(built.to_string(), "http://10.0.0.4:61000/RPC2");
    }

    #[rstest]
    fn trusted_parts_equal_parsed_endpoint() {
        let parsed: RpcEndpoint = "http://localhost:60000/RPC2".parse().expect("valid endpoint");
        assert_eq!(RpcEndpoint::from_trusted_parts("localhost", 60000), parsed);
    }

    #[rstest]
    fn https_uses_known_default_port() {
        let endpoint: RpcEndpoint = "https://supervisor.example".parse().expect("valid endpoint");
        assert_eq!(endpoint.scheme(), Scheme::Https);
        assert_eq!(endpoint.port(), 443);
        assert_eq!(endpoint.to_string(), "https://supervisor.example/RPC2");
    }

    #[rstest]
    fn rejects_unsupported_scheme() {
        let error = "unix:///tmp/supervisor.sock"
            .parse::<RpcEndpoint>()
            .expect_err("unix sockets are not served over HTTP");
        assert!(matches!(error, EndpointParseError::UnsupportedScheme(scheme) if scheme == "unix"));
    }

    #[rstest]
    fn rejects_garbage() {
        let error = "not a url".parse::<RpcEndpoint>().expect_err("not a URL");
        assert!(matches!(error, EndpointParseError::Url(_)));
    }
}
