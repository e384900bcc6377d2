//! State names reported inside supervisor records.

use strum::{Display, EnumString, IntoStaticStr};

/// Global state of the Supvisors cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SupvisorsState {
    /// Addresses are being discovered.
    Initialization,
    /// Applications are being started.
    Deployment,
    /// Normal operation.
    Operation,
    /// Conflicts are waiting to be resolved.
    Conciliation,
    /// The cluster is restarting.
    Restarting,
    /// The cluster is shutting down.
    ShuttingDown,
    /// The cluster has shut down.
    Shutdown,
}

/// State of one address as seen by the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressState {
    /// No tick received yet.
    Unknown,
    /// The remote supervisor is being checked.
    Checking,
    /// The address takes part in the cluster.
    Running,
    /// Ticks stopped arriving.
    Silent,
    /// The address is being isolated.
    Isolating,
    /// The address is isolated from the cluster.
    Isolated,
}

/// Aggregated state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationState {
    /// No process of the application runs.
    Stopped,
    /// The application is starting.
    Starting,
    /// The application runs.
    Running,
    /// The application is stopping.
    Stopping,
}

/// Supervisor state of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessState {
    /// Not running.
    Stopped,
    /// Being started.
    Starting,
    /// Running.
    Running,
    /// Waiting before another start attempt.
    Backoff,
    /// Being stopped.
    Stopping,
    /// Exited on its own.
    Exited,
    /// Could not be started.
    Fatal,
    /// State could not be determined.
    Unknown,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("SHUTTING_DOWN", SupvisorsState::ShuttingDown)]
    #[case("OPERATION", SupvisorsState::Operation)]
    fn supvisors_states_parse(#[case] name: &str, #[case] expected: SupvisorsState) {
        assert_eq!(name.parse::<SupvisorsState>(), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[rstest]
    #[case("BACKOFF", ProcessState::Backoff)]
    #[case("FATAL", ProcessState::Fatal)]
    fn process_states_parse(#[case] name: &str, #[case] expected: ProcessState) {
        assert_eq!(name.parse::<ProcessState>(), Ok(expected));
    }

    #[rstest]
    fn unknown_names_are_rejected() {
        assert!("PAUSED".parse::<ApplicationState>().is_err());
        assert!("running".parse::<AddressState>().is_err());
    }
}
