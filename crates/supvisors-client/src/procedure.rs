//! Remote procedure names.

use strum::{Display, EnumIter, IntoStaticStr};

/// Namespace every Supvisors procedure lives in.
pub const NAMESPACE: &str = "supvisors";

/// Every procedure exposed by the Supvisors XML-RPC interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Procedure {
    /// `get_api_version`
    GetApiVersion,
    /// `get_supvisors_state`
    GetSupvisorsState,
    /// `get_master_address`
    GetMasterAddress,
    /// `get_strategies`
    GetStrategies,
    /// `get_all_addresses_info`
    GetAllAddressesInfo,
    /// `get_address_info`
    GetAddressInfo,
    /// `get_all_applications_info`
    GetAllApplicationsInfo,
    /// `get_application_info`
    GetApplicationInfo,
    /// `get_all_process_info`
    GetAllProcessInfo,
    /// `get_process_info`
    GetProcessInfo,
    /// `get_application_rules`
    GetApplicationRules,
    /// `get_process_rules`
    GetProcessRules,
    /// `get_conflicts`
    GetConflicts,
    /// `start_application`
    StartApplication,
    /// `stop_application`
    StopApplication,
    /// `restart_application`
    RestartApplication,
    /// `start_args`
    StartArgs,
    /// `start_process`
    StartProcess,
    /// `stop_process`
    StopProcess,
    /// `restart_process`
    RestartProcess,
    /// `conciliate`
    Conciliate,
    /// `restart`
    Restart,
    /// `shutdown`
    Shutdown,
}

impl Procedure {
    /// Operation name without the namespace.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Fully qualified name sent on the wire, such as `supvisors.get_api_version`.
    #[must_use]
    pub fn qualified(self) -> String {
        format!("{NAMESPACE}.{}", self.name())
    }
}
