//! Error types surfaced by the typed client.

use std::fmt;

use supvisors_rpc::{FaultCode, RemoteFault, TransportError, ValueKind};
use thiserror::Error;

/// What was wrong with a value that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeProblem {
    /// A required field was absent.
    #[error("missing field '{field}'")]
    MissingField {
        /// Wire name of the field.
        field: &'static str,
    },

    /// A field held a value of the wrong kind.
    #[error("field '{field}' should be {expected}, found {found}")]
    WrongType {
        /// Wire name of the field.
        field: &'static str,
        /// Kind declared for the field.
        expected: ValueKind,
        /// Kind actually received.
        found: ValueKind,
    },

    /// A field held text that is not a known enumeration member.
    #[error("field '{field}' has unknown value '{value}'")]
    InvalidValue {
        /// Wire name of the field.
        field: &'static str,
        /// Text received.
        value: String,
    },

    /// A record was not sent as a struct.
    #[error("expected struct, found {found}")]
    NotStruct {
        /// Kind actually received.
        found: ValueKind,
    },

    /// A collection was not sent as an array.
    #[error("expected array, found {found}")]
    NotArray {
        /// Kind actually received.
        found: ValueKind,
    },

    /// A scalar result had the wrong kind.
    #[error("expected {expected} result, found {found}")]
    UnexpectedResult {
        /// Kind the operation returns.
        expected: ValueKind,
        /// Kind actually received.
        found: ValueKind,
    },

    /// Two records in one response share a name.
    #[error("duplicate name '{name}'")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

/// A result could not be turned into its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode {target}{}: {problem}", ElementIndex(.index))]
pub struct DecodeError {
    target: &'static str,
    index: Option<usize>,
    problem: DecodeProblem,
}

impl DecodeError {
    /// Creates an error for a single value.
    #[must_use]
    pub const fn new(target: &'static str, problem: DecodeProblem) -> Self {
        Self {
            target,
            index: None,
            problem,
        }
    }

    /// Creates an error for the element at `index` of a collection.
    #[must_use]
    pub const fn at(target: &'static str, index: usize, problem: DecodeProblem) -> Self {
        Self {
            target,
            index: Some(index),
            problem,
        }
    }

    /// Label of the record or result being decoded.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        self.target
    }

    /// Position of the failing element, for collections.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// What went wrong.
    #[must_use]
    pub const fn problem(&self) -> &DecodeProblem {
        &self.problem
    }
}

struct ElementIndex<'a>(&'a Option<usize>);

impl fmt::Display for ElementIndex<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(formatter, " at index {index}"),
            None => Ok(()),
        }
    }
}

/// Errors returned by [`crate::SupvisorsClient`].
///
/// Remote faults and local decode failures are kept apart: a fault is always
/// reported as [`ClientError::Fault`], whichever layer observed it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The supervisor rejected or failed the operation.
    #[error("supervisor fault {fault}")]
    Fault {
        /// Fault as reported by the supervisor.
        fault: RemoteFault,
    },

    /// The result did not have the documented shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The call did not complete.
    #[error("transport failure: {source}")]
    Transport {
        /// Underlying transport error.
        #[source]
        source: TransportError,
    },
}

impl ClientError {
    /// Returns the remote fault when the supervisor reported one.
    #[must_use]
    pub const fn fault(&self) -> Option<&RemoteFault> {
        match self {
            Self::Fault { fault } => Some(fault),
            _ => None,
        }
    }

    /// Whether this is a remote fault carrying `code`.
    #[must_use]
    pub fn is_fault(&self, code: FaultCode) -> bool {
        self.fault().is_some_and(|fault| fault.is(code))
    }
}

impl From<RemoteFault> for ClientError {
    fn from(fault: RemoteFault) -> Self {
        Self::Fault { fault }
    }
}

impl From<TransportError> for ClientError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Fault(fault) => Self::Fault { fault },
            source => Self::Transport { source },
        }
    }
}
