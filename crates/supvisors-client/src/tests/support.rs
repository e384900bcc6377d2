//! Test support: a recording transport and builders for supervisor structs.

use std::collections::VecDeque;
use std::sync::Mutex;

use supvisors_rpc::{RpcTransport, TransportError, Value};

/// One call observed by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub(crate) method: String,
    pub(crate) params: Vec<Value>,
}

/// Replays scripted results and records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub(crate) fn replying(reply: Value) -> Self {
        Self::scripted([Ok(reply)])
    }

    pub(crate) fn failing(error: TransportError) -> Self {
        Self::scripted([Err(error)])
    }

    pub(crate) fn scripted(
        replies: impl IntoIterator<Item = Result<Value, TransportError>>,
    ) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().expect("one call")
    }
}

impl RpcTransport for RecordingTransport {
    fn call(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        self.calls.lock().expect("calls lock").push(RecordedCall {
            method: method.to_owned(),
            params: params.to_vec(),
        });
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or(Ok(Value::Bool(true)))
    }
}

pub(crate) fn process_info(application: &str, process: &str, state: &str) -> Value {
    Value::structure([
        ("application_name", Value::from(application)),
        ("process_name", Value::from(process)),
        ("statecode", Value::from(20_i32)),
        ("statename", Value::from(state)),
        ("expected_exit", Value::from(true)),
        ("last_event_time", Value::from(1_700_000_000_i64)),
        ("addresses", Value::from(vec!["10.0.0.1"])),
        ("extra_args", Value::from("")),
    ])
}

pub(crate) fn application_info(application: &str, state: &str) -> Value {
    Value::structure([
        ("application_name", Value::from(application)),
        ("statecode", Value::from(2_i32)),
        ("statename", Value::from(state)),
        ("major_failure", Value::from(false)),
        ("minor_failure", Value::from(true)),
    ])
}

pub(crate) fn address_info(address: &str, state: &str) -> Value {
    Value::structure([
        ("address_name", Value::from(address)),
        ("statecode", Value::from(2_i32)),
        ("statename", Value::from(state)),
        ("remote_time", Value::from(1_700_000_010_i64)),
        ("local_time", Value::from(1_700_000_011_i64)),
        ("loading", Value::from(35_i32)),
    ])
}

pub(crate) fn application_rules(application: &str) -> Value {
    Value::structure([
        ("application_name", Value::from(application)),
        ("start_sequence", Value::from(1_i32)),
        ("stop_sequence", Value::from(2_i32)),
        ("starting_failure_strategy", Value::from("ABORT")),
        ("running_failure_strategy", Value::from("RESTART_PROCESS")),
    ])
}

pub(crate) fn process_rules(application: &str, process: &str) -> Value {
    Value::structure([
        ("application_name", Value::from(application)),
        ("process_name", Value::from(process)),
        ("addresses", Value::from(vec!["*"])),
        ("start_sequence", Value::from(1_i32)),
        ("stop_sequence", Value::from(0_i32)),
        ("required", Value::from(true)),
        ("wait_exit", Value::from(false)),
        ("expected_loading", Value::from(5_i32)),
        ("running_failure_strategy", Value::from("CONTINUE")),
    ])
}
