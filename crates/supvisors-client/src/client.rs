//! Typed facade over the Supvisors XML-RPC interface.

use supvisors_rpc::{RpcTransport, Value, ValueKind};
use tracing::debug;

use crate::CLIENT_TARGET;
use crate::convert::{NameKeyed, convert, decode_record};
use crate::errors::{ClientError, DecodeError, DecodeProblem};
use crate::model::{
    AddressInfo, ApplicationInfo, ApplicationRules, ProcessInfo, ProcessRules, SupvisorsStatus,
    SupvisorsStrategies,
};
use crate::procedure::Procedure;
use crate::strategy::{ConciliationStrategy, StartingStrategy, StrategyFamily};

/// Typed client for one Supvisors instance.
///
/// Every method performs exactly one remote call and keeps nothing between
/// calls. Faults reported by the supervisor come back unchanged as
/// [`ClientError::Fault`]; the codes listed on each method are those the
/// supervisor documents for it.
///
/// Calls with `wait` set block until the supervisor reports the requested
/// state, however long that takes.
#[derive(Debug, Clone)]
pub struct SupvisorsClient<T> {
    transport: T,
}

impl<T: RpcTransport> SupvisorsClient<T> {
    /// Creates a client issuing calls through `transport`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Version of the Supvisors XML-RPC API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the call fails or the result is not a string.
    pub fn api_version(&self) -> Result<String, ClientError> {
        let procedure = Procedure::GetApiVersion;
        let result = self.invoke(procedure, &[])?;
        Ok(expect_string(procedure, result)?)
    }

    /// Global state of the cluster.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the call fails or the result is malformed.
    pub fn supvisors_state(&self) -> Result<SupvisorsStatus, ClientError> {
        let result = self.invoke(Procedure::GetSupvisorsState, &[])?;
        Ok(decode_record(&result)?)
    }

    /// Address of the Supvisors master.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the call fails or the result is not a string.
    pub fn master_address(&self) -> Result<String, ClientError> {
        let procedure = Procedure::GetMasterAddress;
        let result = self.invoke(procedure, &[])?;
        Ok(expect_string(procedure, result)?)
    }

    /// Default strategies of the cluster.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the call fails or the result is malformed.
    pub fn strategies(&self) -> Result<SupvisorsStrategies, ClientError> {
        let result = self.invoke(Procedure::GetStrategies, &[])?;
        Ok(decode_record(&result)?)
    }

    /// Status of every address, keyed by address name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the call fails or any element is malformed.
    pub fn all_addresses_info(&self) -> Result<NameKeyed<AddressInfo>, ClientError> {
        let result = self.invoke(Procedure::GetAllAddressesInfo, &[])?;
        Ok(convert(&result)?)
    }

    /// Status of one address.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_ADDRESS` when the address is unknown.
    pub fn address_info(
        &self,
        address_name: impl AsRef<str>,
    ) -> Result<AddressInfo, ClientError> {
        let params = [Value::from(address_name.as_ref())];
        let result = self.invoke(Procedure::GetAddressInfo, &params)?;
        Ok(decode_record(&result)?)
    }

    /// Status of every application, keyed by application name.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising.
    pub fn all_applications_info(&self) -> Result<NameKeyed<ApplicationInfo>, ClientError> {
        let result = self.invoke(Procedure::GetAllApplicationsInfo, &[])?;
        Ok(convert(&result)?)
    }

    /// Status of one application.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising
    /// and `BAD_NAME` when the application is unknown.
    pub fn application_info(
        &self,
        application_name: impl AsRef<str>,
    ) -> Result<ApplicationInfo, ClientError> {
        let params = [Value::from(application_name.as_ref())];
        let result = self.invoke(Procedure::GetApplicationInfo, &params)?;
        Ok(decode_record(&result)?)
    }

    /// Status of every process, keyed by namespec.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising.
    pub fn all_process_info(&self) -> Result<NameKeyed<ProcessInfo>, ClientError> {
        let result = self.invoke(Procedure::GetAllProcessInfo, &[])?;
        Ok(convert(&result)?)
    }

    /// Status of the processes matching `namespec`, keyed by namespec.
    ///
    /// `namespec` may name one process or, as `application:*`, every process
    /// of an application.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising
    /// and `BAD_NAME` when the namespec matches nothing.
    pub fn process_info(
        &self,
        namespec: impl AsRef<str>,
    ) -> Result<NameKeyed<ProcessInfo>, ClientError> {
        let params = [Value::from(namespec.as_ref())];
        let result = self.invoke(Procedure::GetProcessInfo, &params)?;
        Ok(convert(&result)?)
    }

    /// Start and stop rules of one application.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising
    /// and `BAD_NAME` when the application is unknown.
    pub fn application_rules(
        &self,
        application_name: impl AsRef<str>,
    ) -> Result<ApplicationRules, ClientError> {
        let params = [Value::from(application_name.as_ref())];
        let result = self.invoke(Procedure::GetApplicationRules, &params)?;
        Ok(decode_record(&result)?)
    }

    /// Start and stop rules of the processes matching `namespec`.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising
    /// and `BAD_NAME` when the namespec matches nothing.
    pub fn process_rules(
        &self,
        namespec: impl AsRef<str>,
    ) -> Result<NameKeyed<ProcessRules>, ClientError> {
        let params = [Value::from(namespec.as_ref())];
        let result = self.invoke(Procedure::GetProcessRules, &params)?;
        Ok(convert(&result)?)
    }

    /// Processes running on more than one address, keyed by namespec.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising.
    pub fn conflicts(&self) -> Result<NameKeyed<ProcessInfo>, ClientError> {
        let result = self.invoke(Procedure::GetConflicts, &[])?;
        Ok(convert(&result)?)
    }

    /// Starts an application.
    ///
    /// Returns `false` when there was nothing to start.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` outside the operation state,
    /// `BAD_STRATEGY`, `BAD_NAME` for an unknown application,
    /// `ALREADY_STARTED` and `ABNORMAL_TERMINATION` when the start fails.
    pub fn start_application(
        &self,
        strategy: StartingStrategy,
        application_name: impl AsRef<str>,
        wait: bool,
    ) -> Result<bool, ClientError> {
        let params = [
            Value::from(strategy.ordinal()),
            Value::from(application_name.as_ref()),
            Value::from(wait),
        ];
        self.invoke_bool(Procedure::StartApplication, &params)
    }

    /// Stops an application.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` outside the operation state,
    /// `BAD_NAME` for an unknown application and `NOT_RUNNING`.
    pub fn stop_application(
        &self,
        application_name: impl AsRef<str>,
        wait: bool,
    ) -> Result<bool, ClientError> {
        let params = [Value::from(application_name.as_ref()), Value::from(wait)];
        self.invoke_bool(Procedure::StopApplication, &params)
    }

    /// Stops then starts an application.
    ///
    /// # Errors
    ///
    /// Faults as [`Self::start_application`] does, plus `ABNORMAL_TERMINATION`
    /// when the restart fails.
    pub fn restart_application(
        &self,
        strategy: StartingStrategy,
        application_name: impl AsRef<str>,
        wait: bool,
    ) -> Result<bool, ClientError> {
        let params = [
            Value::from(strategy.ordinal()),
            Value::from(application_name.as_ref()),
            Value::from(wait),
        ];
        self.invoke_bool(Procedure::RestartApplication, &params)
    }

    /// Starts a process on the local address with extra arguments.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_NAME` for an unknown namespec, `BAD_EXTRA_ARGUMENTS`
    /// when the process is required or part of a start sequence,
    /// `ALREADY_STARTED` and `ABNORMAL_TERMINATION` when the start fails.
    pub fn start_args(
        &self,
        namespec: impl AsRef<str>,
        extra_args: &str,
        wait: bool,
    ) -> Result<bool, ClientError> {
        let params = [
            Value::from(namespec.as_ref()),
            Value::from(extra_args),
            Value::from(wait),
        ];
        self.invoke_bool(Procedure::StartArgs, &params)
    }

    /// Starts a process on an address chosen by `strategy`.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` outside the operation state,
    /// `BAD_STRATEGY`, `BAD_NAME` for an unknown namespec, `ALREADY_STARTED`
    /// and `ABNORMAL_TERMINATION` when the start fails.
    pub fn start_process(
        &self,
        strategy: StartingStrategy,
        namespec: impl AsRef<str>,
        extra_args: &str,
        wait: bool,
    ) -> Result<bool, ClientError> {
        let params = [
            Value::from(strategy.ordinal()),
            Value::from(namespec.as_ref()),
            Value::from(extra_args),
            Value::from(wait),
        ];
        self.invoke_bool(Procedure::StartProcess, &params)
    }

    /// Stops a process wherever it runs.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` outside the operation state,
    /// `BAD_NAME` for an unknown namespec and `NOT_RUNNING`.
    pub fn stop_process(
        &self,
        namespec: impl AsRef<str>,
        wait: bool,
    ) -> Result<bool, ClientError> {
        let params = [Value::from(namespec.as_ref()), Value::from(wait)];
        self.invoke_bool(Procedure::StopProcess, &params)
    }

    /// Stops then starts a process.
    ///
    /// # Errors
    ///
    /// Faults as [`Self::start_process`] does, plus `ABNORMAL_TERMINATION`
    /// when the restart fails.
    pub fn restart_process(
        &self,
        strategy: StartingStrategy,
        namespec: impl AsRef<str>,
        extra_args: &str,
        wait: bool,
    ) -> Result<bool, ClientError> {
        let params = [
            Value::from(strategy.ordinal()),
            Value::from(namespec.as_ref()),
            Value::from(extra_args),
            Value::from(wait),
        ];
        self.invoke_bool(Procedure::RestartProcess, &params)
    }

    /// Resolves process conflicts with `strategy`.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` outside the conciliation state and
    /// `BAD_STRATEGY`.
    pub fn conciliate(&self, strategy: ConciliationStrategy) -> Result<bool, ClientError> {
        self.invoke_bool(Procedure::Conciliate, &[Value::from(strategy.ordinal())])
    }

    /// Restarts every supervisor of the cluster.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising.
    pub fn restart(&self) -> Result<bool, ClientError> {
        self.invoke_bool(Procedure::Restart, &[])
    }

    /// Shuts down every supervisor of the cluster.
    ///
    /// # Errors
    ///
    /// Faults with `BAD_SUPVISORS_STATE` while the cluster is initialising.
    pub fn shutdown(&self) -> Result<bool, ClientError> {
        self.invoke_bool(Procedure::Shutdown, &[])
    }

    fn invoke(&self, procedure: Procedure, params: &[Value]) -> Result<Value, ClientError> {
        debug!(
            target: CLIENT_TARGET,
            procedure = procedure.name(),
            params = params.len(),
            "invoking procedure"
        );
        Ok(self.transport.call(&procedure.qualified(), params)?)
    }

    fn invoke_bool(&self, procedure: Procedure, params: &[Value]) -> Result<bool, ClientError> {
        let result = self.invoke(procedure, params)?;
        result
            .as_bool()
            .ok_or_else(|| unexpected(procedure, ValueKind::Bool, &result).into())
    }
}

fn expect_string(procedure: Procedure, result: Value) -> Result<String, DecodeError> {
    match result {
        Value::String(text) => Ok(text),
        other => Err(unexpected(procedure, ValueKind::String, &other)),
    }
}

fn unexpected(procedure: Procedure, expected: ValueKind, found: &Value) -> DecodeError {
    DecodeError::new(
        procedure.name(),
        DecodeProblem::UnexpectedResult {
            expected,
            found: found.kind(),
        },
    )
}
