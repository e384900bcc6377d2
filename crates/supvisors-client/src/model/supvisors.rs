//! Cluster-wide status and strategy records.

use std::fmt;

use supvisors_rpc::ValueKind;

use crate::errors::DecodeProblem;
use crate::record::{FieldSpec, Fields, Record};
use crate::state::SupvisorsState;
use crate::strategy::{ConciliationStrategy, StartingStrategy};

/// Global state of the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupvisorsStatus {
    /// Current state of the Supvisors state machine.
    pub state: SupvisorsState,
}

impl Record for SupvisorsStatus {
    const KIND: &'static str = "supvisors status";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::required("statename", ValueKind::String)];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, DecodeProblem> {
        Ok(Self {
            state: fields.parsed("statename")?,
        })
    }

    fn name(&self) -> String {
        self.state.to_string()
    }
}

impl fmt::Display for SupvisorsStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "SupvisorsStatus(state={})", self.state)
    }
}

/// Strategies the cluster applies when no explicit strategy is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupvisorsStrategies {
    /// Whether unreachable addresses are isolated automatically.
    pub auto_fencing: bool,
    /// Default starting strategy.
    pub starting: StartingStrategy,
    /// Default conciliation strategy.
    pub conciliation: ConciliationStrategy,
}

impl SupvisorsStrategies {
    /// Key of the single strategies record.
    pub const NAME: &'static str = "strategies";
}

impl Record for SupvisorsStrategies {
    const KIND: &'static str = "supvisors strategies";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("auto-fencing", ValueKind::Bool),
        FieldSpec::required("starting", ValueKind::String),
        FieldSpec::required("conciliation", ValueKind::String),
    ];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, DecodeProblem> {
        Ok(Self {
            auto_fencing: fields.boolean("auto-fencing")?,
            starting: fields.parsed("starting")?,
            conciliation: fields.parsed("conciliation")?,
        })
    }

    fn name(&self) -> String {
        Self::NAME.to_owned()
    }
}

impl fmt::Display for SupvisorsStrategies {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "SupvisorsStrategies(autoFencing={} starting={} conciliation={})",
            self.auto_fencing, self.starting, self.conciliation
        )
    }
}
