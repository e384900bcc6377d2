//! Faults reported by the supervisor.

use std::fmt;

use strum::{Display, IntoStaticStr};

/// A fault returned by the supervisor, carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFault {
    /// Numeric fault code from the remote taxonomy.
    pub code: i32,
    /// Human-readable message from the supervisor.
    pub message: String,
}

impl RemoteFault {
    /// Builds a fault from its code and message.
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Maps the numeric code onto a known [`FaultCode`], if listed.
    #[must_use]
    pub const fn known_code(&self) -> Option<FaultCode> {
        FaultCode::from_code(self.code)
    }

    /// Whether this fault carries the given known code.
    #[must_use]
    pub const fn is(&self, code: FaultCode) -> bool {
        self.code == code.code()
    }
}

impl fmt::Display for RemoteFault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_code() {
            Some(known) => write!(formatter, "{known} ({}): {}", self.code, self.message),
            None => write!(formatter, "fault {}: {}", self.code, self.message),
        }
    }
}

/// Fault codes defined by Supervisor and extended by Supvisors.
///
/// The facade never interprets these; they exist so callers can branch on a
/// fault by name instead of by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FaultCode {
    /// The procedure is not known to the server.
    UnknownMethod,
    /// The parameter count does not match the procedure signature.
    IncorrectParameters,
    /// A parameter has the wrong type or value.
    BadArguments,
    /// Introspection of the signature is not supported.
    SignatureUnsupported,
    /// Supervisor is shutting down.
    ShutdownState,
    /// An application, process or namespec is unknown.
    BadName,
    /// The signal name is unknown.
    BadSignal,
    /// A file was not found.
    NoFile,
    /// The program is not executable.
    NotExecutable,
    /// Generic failure.
    Failed,
    /// The target stopped abnormally while starting or stopping.
    AbnormalTermination,
    /// The process could not be spawned.
    SpawnError,
    /// The target is already started.
    AlreadyStarted,
    /// The target is not running.
    NotRunning,
    /// Success marker used in multi-call results.
    Success,
    /// The group is already added.
    AlreadyAdded,
    /// The group still has running processes.
    StillRunning,
    /// The configuration cannot be reread.
    CantReread,
    /// Supvisors is not in a state accepting the request.
    BadSupvisorsState,
    /// The address is unknown.
    BadAddress,
    /// The strategy is unknown.
    BadStrategy,
    /// Extra arguments are not allowed for this program.
    BadExtraArguments,
}

impl FaultCode {
    /// Numeric code sent on the wire.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::UnknownMethod => 1,
            Self::IncorrectParameters => 2,
            Self::BadArguments => 3,
            Self::SignatureUnsupported => 4,
            Self::ShutdownState => 6,
            Self::BadName => 10,
            Self::BadSignal => 11,
            Self::NoFile => 20,
            Self::NotExecutable => 21,
            Self::Failed => 30,
            Self::AbnormalTermination => 40,
            Self::SpawnError => 50,
            Self::AlreadyStarted => 60,
            Self::NotRunning => 70,
            Self::Success => 80,
            Self::AlreadyAdded => 90,
            Self::StillRunning => 91,
            Self::CantReread => 92,
            Self::BadSupvisorsState => 100,
            Self::BadAddress => 101,
            Self::BadStrategy => 102,
            Self::BadExtraArguments => 103,
        }
    }

    /// Looks up the known code for a numeric value.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        let known = match code {
            1 => Self::UnknownMethod,
            2 => Self::IncorrectParameters,
            3 => Self::BadArguments,
            4 => Self::SignatureUnsupported,
            6 => Self::ShutdownState,
            10 => Self::BadName,
            11 => Self::BadSignal,
            20 => Self::NoFile,
            21 => Self::NotExecutable,
            30 => Self::Failed,
            40 => Self::AbnormalTermination,
            50 => Self::SpawnError,
            60 => Self::AlreadyStarted,
            70 => Self::NotRunning,
            80 => Self::Success,
            90 => Self::AlreadyAdded,
            91 => Self::StillRunning,
            92 => Self::CantReread,
            100 => Self::BadSupvisorsState,
            101 => Self::BadAddress,
            102 => Self::BadStrategy,
            103 => Self::BadExtraArguments,
            _ => return None,
        };
        Some(known)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(FaultCode::BadName, 10)]
    #[case(FaultCode::AlreadyStarted, 60)]
    #[case(FaultCode::NotRunning, 70)]
    #[case(FaultCode::BadSupvisorsState, 100)]
    #[case(FaultCode::BadExtraArguments, 103)]
    fn codes_map_both_ways(#[case] known: FaultCode, #[case] code: i32) {
        assert_eq!(known.code(), code);
        assert_eq!(FaultCode::from_code(code), Some(known));
    }

    #[rstest]
    fn unlisted_code_is_not_guessed() {
        let fault = RemoteFault::new(9999, "surprise");
        assert_eq!(fault.known_code(), None);
        assert_eq!(fault.to_string(), "fault 9999: surprise");
    }

    #[rstest]
    fn display_names_known_codes() {
        let fault = RemoteFault::new(10, "BAD_NAME: unknown application");
        assert!(fault.is(FaultCode::BadName));
        assert_eq!(fault.to_string(), "BAD_NAME (10): BAD_NAME: unknown application");
    }
}
