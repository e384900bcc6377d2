//! XML-RPC plumbing for talking to a Supvisors supervisor.
//!
//! The crate exposes the untyped [`Value`] model, the [`RpcTransport`] seam
//! that the typed client is written against, an XML-RPC codec and a blocking
//! [`HttpTransport`] that posts calls to the supervisor endpoint.

mod error;
mod fault;
mod http;
mod transport;
mod value;
pub mod xmlrpc;

pub use error::{CodecError, TransportError};
pub use fault::{FaultCode, RemoteFault};
pub use http::HttpTransport;
pub use transport::RpcTransport;
pub use value::{StructMap, Value, ValueKind};

pub(crate) const RPC_TARGET: &str = "supvisors::rpc";
