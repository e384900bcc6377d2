//! Error types for the XML-RPC transport.

use std::io;

use thiserror::Error;

use crate::fault::RemoteFault;

/// Errors raised while performing one remote call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The supervisor rejected or failed the call.
    #[error("supervisor returned {0}")]
    Fault(RemoteFault),

    /// The HTTP exchange could not be completed.
    #[error("HTTP request to {endpoint} failed: {message}")]
    Http {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Description of the network failure.
        message: String,
    },

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {status} from {endpoint}")]
    Status {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be read.
    #[error("failed to read response body from {endpoint}: {source}")]
    Body {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The request or response payload was not valid XML-RPC.
    #[error("XML-RPC codec error: {0}")]
    Codec(#[from] CodecError),
}

impl TransportError {
    /// Returns the remote fault when this error carries one.
    #[must_use]
    pub const fn fault(&self) -> Option<&RemoteFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}

/// Errors raised while encoding or decoding XML-RPC documents.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] xml::reader::Error),

    /// The document could not be written.
    #[error("failed to write XML: {0}")]
    Write(#[from] xml::writer::Error),

    /// An element other than the expected one was found.
    #[error("expected <{expected}>, found <{found}>")]
    UnexpectedElement {
        /// Element required at this position.
        expected: &'static str,
        /// Element actually present.
        found: String,
    },

    /// A required child element was absent.
    #[error("<{parent}> is missing <{child}>")]
    MissingElement {
        /// Element that should contain the child.
        parent: &'static str,
        /// Missing child element.
        child: &'static str,
    },

    /// A value type element is not part of XML-RPC.
    #[error("unsupported value type <{0}>")]
    UnsupportedType(String),

    /// Scalar text could not be parsed as its declared type.
    #[error("invalid {kind} literal '{text}'")]
    InvalidScalar {
        /// Declared scalar type.
        kind: &'static str,
        /// Offending text.
        text: String,
    },

    /// An integer does not fit the 32-bit wire encoding.
    #[error("integer {0} does not fit in a 32-bit XML-RPC int")]
    IntegerOutOfRange(i64),

    /// A double is NaN or infinite.
    #[error("double {0} cannot be encoded")]
    NonFiniteDouble(f64),

    /// The fault struct lacks `faultCode` or `faultString`.
    #[error("malformed fault: {0}")]
    MalformedFault(String),

    /// The response holds no value.
    #[error("response contains no value")]
    EmptyResponse,

    /// Encoded output was not valid UTF-8.
    #[error("encoded document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
