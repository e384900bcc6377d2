//! Expectation-based coverage using a `mockall` transport.

use mockall::mock;
use mockall::predicate::eq;
use rstest::rstest;
use supvisors_rpc::{FaultCode, RemoteFault, RpcTransport, TransportError, Value};

use super::support::application_info;
use crate::{ClientError, ConciliationStrategy, SupvisorsClient};

mock! {
    Transport {}
    impl RpcTransport for Transport {
        fn call(&self, method: &str, params: &[Value]) -> Result<Value, TransportError>;
    }
}

#[rstest]
fn conciliate_outside_conciliation_state_is_a_fault() {
    let mut transport = MockTransport::new();
    transport
        .expect_call()
        .withf(|method, params| {
            method == "supvisors.conciliate" && params == [Value::from(1_i32)].as_slice()
        })
        .times(1)
        .returning(|_, _| {
            Err(TransportError::Fault(RemoteFault::new(
                FaultCode::BadSupvisorsState.code(),
                "BAD_SUPVISORS_STATE: not in CONCILIATION state",
            )))
        });
    let client = SupvisorsClient::new(transport);

    let error = client
        .conciliate(ConciliationStrategy::Infanticide)
        .expect_err("not in conciliation");

    assert!(error.is_fault(FaultCode::BadSupvisorsState));
}

#[rstest]
fn each_call_reaches_the_transport_once() {
    let mut transport = MockTransport::new();
    transport
        .expect_call()
        .with(eq("supvisors.get_all_applications_info"), eq(Vec::<Value>::new()))
        .times(2)
        .returning(|_, _| Ok(Value::Array(vec![application_info("web", "RUNNING")])));
    let client = SupvisorsClient::new(transport);

    let first = client.all_applications_info().expect("first call");
    let second = client.all_applications_info().expect("second call");

    assert_eq!(first, second);
}

#[rstest]
fn fault_on_one_call_does_not_affect_the_next() {
    let mut transport = MockTransport::new();
    let mut sequence = mockall::Sequence::new();
    transport
        .expect_call()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_, _| {
            Err(TransportError::Fault(RemoteFault::new(
                FaultCode::AlreadyStarted.code(),
                "ALREADY_STARTED: web",
            )))
        });
    transport
        .expect_call()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_, _| Ok(Value::Bool(true)));
    let client = SupvisorsClient::new(transport);

    let failed = client.stop_application("web", true);
    let stopped = client.stop_application("web", true);

    assert!(matches!(failed, Err(ClientError::Fault { .. })));
    assert!(stopped.expect("second stop succeeds"));
}
