//! XML-RPC message encoding and decoding.
//!
//! Supervisor speaks XML-RPC over HTTP. Requests are `methodCall` documents
//! naming the procedure and carrying ordered parameters; responses are
//! `methodResponse` documents holding either a single value or a fault
//! struct with `faultCode` and `faultString` members.

mod decode;
mod encode;
mod tree;

pub use decode::{decode_call, decode_response};
pub use encode::{encode_call, encode_response};

use crate::fault::RemoteFault;
use crate::value::Value;

/// A decoded `methodCall` document.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Fully qualified procedure name.
    pub method: String,
    /// Ordered parameters.
    pub params: Vec<Value>,
}

impl MethodCall {
    /// Creates a call for `method` with `params`.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// A decoded `methodResponse` document.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    /// The call succeeded with this value.
    Success(Value),
    /// The call failed remotely.
    Fault(RemoteFault),
}
