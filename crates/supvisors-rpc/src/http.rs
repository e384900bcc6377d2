//! XML-RPC over HTTP using a blocking `ureq` agent.
//!
//! Each call is one `POST` of a `methodCall` document to the configured
//! endpoint over a fresh connection; idle connections are never kept. The
//! response body is decoded and a fault, if present, is surfaced as
//! [`TransportError::Fault`] with its code and message intact.

use std::io::Read;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use supvisors_config::{Config, RpcEndpoint};
use tracing::{debug, warn};

use crate::RPC_TARGET;
use crate::error::TransportError;
use crate::transport::RpcTransport;
use crate::value::Value;
use crate::xmlrpc::{MethodResponse, decode_response, encode_call};

const CONTENT_TYPE: &str = "text/xml";

/// Sends calls to a Supervisor XML-RPC endpoint over HTTP.
#[derive(Debug)]
pub struct HttpTransport {
    agent: ureq::Agent,
    endpoint: RpcEndpoint,
    authorization: Option<String>,
}

impl HttpTransport {
    /// Creates a transport for `endpoint` without credentials.
    #[must_use]
    pub fn new(endpoint: RpcEndpoint) -> Self {
        Self {
            agent: build_agent(None),
            endpoint,
            authorization: None,
        }
    }

    /// Creates a transport from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let transport =
            Self::new(config.endpoint().clone()).with_connect_timeout(config.connect_timeout());
        match config.credentials() {
            Some((username, password)) => transport.with_credentials(username, password),
            None => transport,
        }
    }

    /// Sends HTTP basic credentials with every call.
    #[must_use]
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        let token = STANDARD.encode(format!("{username}:{password}"));
        self.authorization = Some(format!("Basic {token}"));
        self
    }

    /// Bounds the time spent establishing the connection.
    ///
    /// Reads are left unbounded: calls made with `wait` set block until the
    /// supervisor has finished the requested transition.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.agent = build_agent(Some(timeout));
        self
    }

    /// Returns the endpoint calls are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &RpcEndpoint {
        &self.endpoint
    }

    fn post(&self, body: &str) -> Result<String, TransportError> {
        let endpoint = self.endpoint.to_string();
        let mut request = self
            .agent
            .post(&endpoint)
            .set("Content-Type", CONTENT_TYPE);
        if let Some(authorization) = &self.authorization {
            request = request.set("Authorization", authorization);
        }

        let response = request.send_string(body).map_err(|error| match error {
            ureq::Error::Status(status, _) => TransportError::Status {
                endpoint: endpoint.clone(),
                status,
            },
            ureq::Error::Transport(transport) => TransportError::Http {
                endpoint: endpoint.clone(),
                message: transport.to_string(),
            },
        })?;

        // `into_string` caps bodies at 10 MiB; full process listings can exceed it.
        let mut text = String::new();
        response
            .into_reader()
            .read_to_string(&mut text)
            .map_err(|source| TransportError::Body { endpoint, source })?;
        Ok(text)
    }
}

fn build_agent(connect_timeout: Option<Duration>) -> ureq::Agent {
    let mut builder = ureq::AgentBuilder::new().max_idle_connections(0);
    if let Some(timeout) = connect_timeout {
        builder = builder.timeout_connect(timeout);
    }
    builder.build()
}

impl RpcTransport for HttpTransport {
    fn call(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        debug!(
            target: RPC_TARGET,
            method,
            params = params.len(),
            endpoint = %self.endpoint,
            "sending XML-RPC call"
        );

        let request = encode_call(method, params)?;
        let body = self.post(&request)?;

        match decode_response(&body)? {
            MethodResponse::Success(value) => {
                debug!(target: RPC_TARGET, method, kind = %value.kind(), "call succeeded");
                Ok(value)
            }
            MethodResponse::Fault(fault) => {
                warn!(
                    target: RPC_TARGET,
                    method,
                    code = fault.code,
                    message = %fault.message,
                    "supervisor returned a fault"
                );
                Err(TransportError::Fault(fault))
            }
        }
    }
}
