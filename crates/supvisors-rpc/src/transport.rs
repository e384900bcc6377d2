//! The seam between the typed facade and the wire.

use std::sync::Arc;

use crate::error::TransportError;
use crate::value::Value;

/// Performs one remote procedure call.
///
/// Implementations send `method` with the ordered `params`, wait for the
/// single response and return its value. Faults reported by the supervisor
/// come back as [`TransportError::Fault`]. Implementations must be safe to
/// share between threads; any per-call state lives inside `call`.
pub trait RpcTransport: Send + Sync {
    /// Invokes `method` with `params` and returns the untyped result.
    fn call(&self, method: &str, params: &[Value]) -> Result<Value, TransportError>;
}

impl<T: RpcTransport + ?Sized> RpcTransport for &T {
    fn call(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        (**self).call(method, params)
    }
}

impl<T: RpcTransport + ?Sized> RpcTransport for Box<T> {
    fn call(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        (**self).call(method, params)
    }
}

impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    fn call(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        (**self).call(method, params)
    }
}
