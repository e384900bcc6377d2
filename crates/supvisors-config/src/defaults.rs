use crate::endpoint::RpcEndpoint;

/// Default host of the supervisor XML-RPC interface.
pub const DEFAULT_HOST: &str = "localhost";

/// Default port of the supervisor XML-RPC interface.
pub const DEFAULT_PORT: u16 = 60000;

/// Default timeout, in seconds, for establishing the HTTP connection.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default connect timeout in seconds.
#[must_use]
pub const fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

/// Default supervisor endpoint, `http://localhost:60000/RPC2`.
#[must_use]
pub fn default_endpoint() -> RpcEndpoint {
    RpcEndpoint::from_trusted_parts(DEFAULT_HOST, DEFAULT_PORT)
}
