use std::fmt;

use supvisors_rpc::ValueKind;

use super::namespec;
use crate::errors::DecodeProblem;
use crate::record::{FieldSpec, Fields, Record};
use crate::state::ProcessState;
use crate::strategy::RunningFailureStrategy;

/// Status of one process across the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    /// Application the process belongs to.
    pub application_name: String,
    /// Name of the process within its application.
    pub process_name: String,
    /// Supervisor state of the process.
    pub state: ProcessState,
    /// Whether the last exit code was an expected one.
    pub expected_exit: bool,
    /// Time of the last state change, in seconds since the epoch.
    pub last_event_time: i64,
    /// Addresses the process currently runs on. More than one means a conflict.
    pub addresses: Vec<String>,
    /// Extra arguments the process was last started with.
    pub extra_args: Option<String>,
}

impl ProcessInfo {
    /// `application:process` form of the process name.
    #[must_use]
    pub fn namespec(&self) -> String {
        namespec(&self.application_name, &self.process_name)
    }

    /// Whether the process runs on more than one address.
    #[must_use]
    pub fn is_conflicting(&self) -> bool {
        self.addresses.len() > 1
    }
}

impl Record for ProcessInfo {
    const KIND: &'static str = "process info";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("application_name", ValueKind::String),
        FieldSpec::required("process_name", ValueKind::String),
        FieldSpec::required("statename", ValueKind::String),
        FieldSpec::required("expected_exit", ValueKind::Bool),
        FieldSpec::required("last_event_time", ValueKind::Int),
        FieldSpec::required("addresses", ValueKind::Array),
        FieldSpec::optional("extra_args", ValueKind::String),
    ];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, DecodeProblem> {
        Ok(Self {
            application_name: fields.string("application_name")?,
            process_name: fields.string("process_name")?,
            state: fields.parsed("statename")?,
            expected_exit: fields.boolean("expected_exit")?,
            last_event_time: fields.int("last_event_time")?,
            addresses: fields.strings("addresses")?,
            extra_args: fields.optional_string("extra_args")?,
        })
    }

    fn name(&self) -> String {
        self.namespec()
    }
}

impl fmt::Display for ProcessInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "ProcessInfo(namespec={} state={} expectedExit={} lastEventTime={} addresses={:?}",
            self.namespec(),
            self.state,
            self.expected_exit,
            self.last_event_time,
            self.addresses
        )?;
        if let Some(extra_args) = &self.extra_args {
            write!(formatter, " extraArgs=\"{extra_args}\"")?;
        }
        formatter.write_str(")")
    }
}

/// Rules used to start and stop one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRules {
    /// Application the process belongs to.
    pub application_name: String,
    /// Name of the process within its application.
    pub process_name: String,
    /// Addresses the process may be started on. `*` allows any.
    pub addresses: Vec<String>,
    /// Position in the application start sequence.
    pub start_sequence: i64,
    /// Position in the application stop sequence.
    pub stop_sequence: i64,
    /// A failure of this process is a major failure of its application.
    pub required: bool,
    /// The start sequence waits for this process to exit.
    pub wait_exit: bool,
    /// Expected load on its address, in percent.
    pub expected_loading: i64,
    /// Reaction to this process failing while running.
    pub running_failure_strategy: RunningFailureStrategy,
}

impl ProcessRules {
    /// `application:process` form of the process name.
    #[must_use]
    pub fn namespec(&self) -> String {
        namespec(&self.application_name, &self.process_name)
    }
}

impl Record for ProcessRules {
    const KIND: &'static str = "process rules";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("application_name", ValueKind::String),
        FieldSpec::required("process_name", ValueKind::String),
        FieldSpec::required("addresses", ValueKind::Array),
        FieldSpec::required("start_sequence", ValueKind::Int),
        FieldSpec::required("stop_sequence", ValueKind::Int),
        FieldSpec::required("required", ValueKind::Bool),
        FieldSpec::required("wait_exit", ValueKind::Bool),
        FieldSpec::required("expected_loading", ValueKind::Int),
        FieldSpec::required("running_failure_strategy", ValueKind::String),
    ];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, DecodeProblem> {
        Ok(Self {
            application_name: fields.string("application_name")?,
            process_name: fields.string("process_name")?,
            addresses: fields.strings("addresses")?,
            start_sequence: fields.int("start_sequence")?,
            stop_sequence: fields.int("stop_sequence")?,
            required: fields.boolean("required")?,
            wait_exit: fields.boolean("wait_exit")?,
            expected_loading: fields.int("expected_loading")?,
            running_failure_strategy: fields.parsed("running_failure_strategy")?,
        })
    }

    fn name(&self) -> String {
        self.namespec()
    }
}

impl fmt::Display for ProcessRules {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "ProcessRules(namespec={} addresses={:?} startSequence={} stopSequence={} \
             required={} waitExit={} expectedLoading={} runningFailureStrategy={})",
            self.namespec(),
            self.addresses,
            self.start_sequence,
            self.stop_sequence,
            self.required,
            self.wait_exit,
            self.expected_loading,
            self.running_failure_strategy
        )
    }
}
