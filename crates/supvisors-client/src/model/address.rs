use std::fmt;

use supvisors_rpc::ValueKind;

use crate::errors::DecodeProblem;
use crate::record::{FieldSpec, Fields, Record};
use crate::state::AddressState;

/// Status of one address taking part in the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInfo {
    /// Host name of the address.
    pub address_name: String,
    /// State of the address as seen by the master.
    pub state: AddressState,
    /// Time reported by the remote address in its last tick, in seconds.
    pub remote_time: i64,
    /// Local time at which that tick arrived, in seconds.
    pub local_time: i64,
    /// Expected load of the processes running there, in percent.
    pub loading: i64,
}

impl Record for AddressInfo {
    const KIND: &'static str = "address info";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("address_name", ValueKind::String),
        FieldSpec::required("statename", ValueKind::String),
        FieldSpec::required("remote_time", ValueKind::Int),
        FieldSpec::required("local_time", ValueKind::Int),
        FieldSpec::required("loading", ValueKind::Int),
    ];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, DecodeProblem> {
        Ok(Self {
            address_name: fields.string("address_name")?,
            state: fields.parsed("statename")?,
            remote_time: fields.int("remote_time")?,
            local_time: fields.int("local_time")?,
            loading: fields.int("loading")?,
        })
    }

    fn name(&self) -> String {
        self.address_name.clone()
    }
}

impl fmt::Display for AddressInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "AddressInfo(name={} state={} remoteTime={} localTime={} loading={})",
            self.address_name, self.state, self.remote_time, self.local_time, self.loading
        )
    }
}
