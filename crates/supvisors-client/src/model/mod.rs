//! Domain records returned by the supervisor.
//!
//! Records are immutable snapshots taken when the call returned. Each one
//! implements [`crate::Record`], which declares its wire fields and the name
//! it is keyed by in collections.

mod address;
mod application;
mod process;
mod supvisors;

pub use address::AddressInfo;
pub use application::{ApplicationInfo, ApplicationRules};
pub use process::{ProcessInfo, ProcessRules};
pub use supvisors::{SupvisorsStatus, SupvisorsStrategies};

/// Joins an application and process name into a namespec.
pub(crate) fn namespec(application_name: &str, process_name: &str) -> String {
    format!("{application_name}:{process_name}")
}
