use std::fmt;

use supvisors_rpc::ValueKind;

use crate::errors::DecodeProblem;
use crate::record::{FieldSpec, Fields, Record};
use crate::state::ApplicationState;
use crate::strategy::{RunningFailureStrategy, StartingFailureStrategy};

/// Status of one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationInfo {
    /// Name of the application.
    pub application_name: String,
    /// Aggregated state of its processes.
    pub state: ApplicationState,
    /// A required process failed.
    pub major_failure: bool,
    /// An optional process failed.
    pub minor_failure: bool,
}

impl Record for ApplicationInfo {
    const KIND: &'static str = "application info";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("application_name", ValueKind::String),
        FieldSpec::required("statename", ValueKind::String),
        FieldSpec::required("major_failure", ValueKind::Bool),
        FieldSpec::required("minor_failure", ValueKind::Bool),
    ];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, DecodeProblem> {
        Ok(Self {
            application_name: fields.string("application_name")?,
            state: fields.parsed("statename")?,
            major_failure: fields.boolean("major_failure")?,
            minor_failure: fields.boolean("minor_failure")?,
        })
    }

    fn name(&self) -> String {
        self.application_name.clone()
    }
}

impl fmt::Display for ApplicationInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "ApplicationInfo(name={} state={} majorFailure={} minorFailure={})",
            self.application_name, self.state, self.major_failure, self.minor_failure
        )
    }
}

/// Rules used to start and stop one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRules {
    /// Name of the application.
    pub application_name: String,
    /// Position in the cluster start sequence. Zero means not started automatically.
    pub start_sequence: i64,
    /// Position in the cluster stop sequence.
    pub stop_sequence: i64,
    /// Reaction to a process failing while the application starts.
    pub starting_failure_strategy: StartingFailureStrategy,
    /// Reaction to a process failing while the application runs.
    pub running_failure_strategy: RunningFailureStrategy,
}

impl Record for ApplicationRules {
    const KIND: &'static str = "application rules";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("application_name", ValueKind::String),
        FieldSpec::required("start_sequence", ValueKind::Int),
        FieldSpec::required("stop_sequence", ValueKind::Int),
        FieldSpec::required("starting_failure_strategy", ValueKind::String),
        FieldSpec::required("running_failure_strategy", ValueKind::String),
    ];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, DecodeProblem> {
        Ok(Self {
            application_name: fields.string("application_name")?,
            start_sequence: fields.int("start_sequence")?,
            stop_sequence: fields.int("stop_sequence")?,
            starting_failure_strategy: fields.parsed("starting_failure_strategy")?,
            running_failure_strategy: fields.parsed("running_failure_strategy")?,
        })
    }

    fn name(&self) -> String {
        self.application_name.clone()
    }
}

impl fmt::Display for ApplicationRules {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "ApplicationRules(name={} startSequence={} stopSequence={} \
             startingFailureStrategy={} runningFailureStrategy={})",
            self.application_name,
            self.start_sequence,
            self.stop_sequence,
            self.starting_failure_strategy,
            self.running_failure_strategy
        )
    }
}
