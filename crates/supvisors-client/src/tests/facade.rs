//! Procedure names, parameter order and result decoding for every operation.

use rstest::rstest;
use supvisors_rpc::{FaultCode, RemoteFault, TransportError, Value, ValueKind};

use super::support::{
    RecordedCall, RecordingTransport, address_info, application_info, application_rules,
    process_info, process_rules,
};
use crate::{
    AddressState, ApplicationState, ClientError, ConciliationStrategy, DecodeProblem, Namespec,
    ProcessState, RunningFailureStrategy, StartingFailureStrategy, StartingStrategy,
    SupvisorsClient, SupvisorsState,
};

fn call(method: &str, params: Vec<Value>) -> RecordedCall {
    RecordedCall {
        method: method.to_owned(),
        params,
    }
}

#[rstest]
fn application_wide_process_info_keeps_array_order() {
    let transport = RecordingTransport::replying(Value::Array(vec![
        process_info("app", "proc1", "RUNNING"),
        process_info("app", "proc2", "STOPPED"),
    ]));
    let client = SupvisorsClient::new(&transport);

    let processes = client.process_info("app:*").expect("process info");

    let keys: Vec<&str> = processes.keys().map(String::as_str).collect();
    assert_eq!(keys, ["app:proc1", "app:proc2"]);
    assert_eq!(
        processes.get("app:proc2").map(|process| process.state),
        Some(ProcessState::Stopped)
    );
    assert_eq!(
        transport.single_call(),
        call("supvisors.get_process_info", vec![Value::from("app:*")])
    );
}

#[rstest]
fn unknown_application_fault_passes_through() {
    let transport = RecordingTransport::failing(TransportError::Fault(RemoteFault::new(
        FaultCode::BadName.code(),
        "BAD_NAME: missing",
    )));
    let client = SupvisorsClient::new(&transport);

    let error = client
        .application_info("missing")
        .expect_err("unknown application");

    let ClientError::Fault { fault } = &error else {
        panic!("expected a remote fault, got {error:?}");
    };
    assert_eq!(fault.code, 10);
    assert_eq!(fault.message, "BAD_NAME: missing");
}

#[rstest]
#[case(StartingStrategy::Config, 0)]
#[case(StartingStrategy::LessLoaded, 1)]
#[case(StartingStrategy::MostLoaded, 2)]
#[case(StartingStrategy::Local, 3)]
fn start_application_sends_ordinal_name_and_wait(
    #[case] strategy: StartingStrategy,
    #[case] ordinal: i32,
) {
    let transport = RecordingTransport::replying(Value::Bool(true));
    let client = SupvisorsClient::new(&transport);

    let started = client
        .start_application(strategy, "app", true)
        .expect("start application");

    assert!(started);
    assert_eq!(
        transport.single_call(),
        call(
            "supvisors.start_application",
            vec![Value::from(ordinal), Value::from("app"), Value::from(true)]
        )
    );
}

#[rstest]
fn missing_name_field_fails_the_whole_collection() {
    let mut broken = process_info("app", "proc2", "RUNNING");
    if let Value::Struct(members) = &mut broken {
        members.remove("process_name");
    }
    let transport = RecordingTransport::replying(Value::Array(vec![
        process_info("app", "proc1", "RUNNING"),
        broken,
    ]));
    let client = SupvisorsClient::new(&transport);

    let error = client.all_process_info().expect_err("second element is broken");

    let ClientError::Decode(decode) = &error else {
        panic!("expected a decode error, got {error:?}");
    };
    assert_eq!(decode.index(), Some(1));
    assert_eq!(
        decode.problem(),
        &DecodeProblem::MissingField {
            field: "process_name"
        }
    );
}

#[rstest]
fn empty_array_is_an_empty_map() {
    let transport = RecordingTransport::replying(Value::Array(Vec::new()));
    let client = SupvisorsClient::new(&transport);

    let conflicts = client.conflicts().expect("no conflicts");

    assert!(conflicts.is_empty());
    assert_eq!(transport.single_call().method, "supvisors.get_conflicts");
}

#[rstest]
fn scalar_results_are_type_checked() {
    let transport = RecordingTransport::replying(Value::from(3_i32));
    let client = SupvisorsClient::new(&transport);

    let error = client.master_address().expect_err("int is not an address");

    let ClientError::Decode(decode) = &error else {
        panic!("expected a decode error, got {error:?}");
    };
    assert_eq!(decode.target(), "get_master_address");
    assert_eq!(
        decode.problem(),
        &DecodeProblem::UnexpectedResult {
            expected: ValueKind::String,
            found: ValueKind::Int,
        }
    );
}

#[rstest]
fn boolean_results_are_type_checked() {
    let transport = RecordingTransport::replying(Value::from("yes"));
    let client = SupvisorsClient::new(&transport);

    let error = client.restart().expect_err("string is not a boolean");

    assert!(matches!(error, ClientError::Decode(_)));
}

#[rstest]
fn non_fault_transport_errors_stay_transport_errors() {
    let transport = RecordingTransport::failing(TransportError::Status {
        endpoint: "http://localhost:60000/RPC2".to_owned(),
        status: 401,
    });
    let client = SupvisorsClient::new(&transport);

    let error = client.shutdown().expect_err("unauthorised");

    assert!(matches!(error, ClientError::Transport { .. }));
    assert!(error.fault().is_none());
}

#[rstest]
fn read_operations_decode_their_records() {
    let transport = RecordingTransport::scripted([
        Ok(Value::from("1.0")),
        Ok(Value::structure([
            ("statecode", Value::from(2_i32)),
            ("statename", Value::from("OPERATION")),
        ])),
        Ok(Value::from("10.0.0.1")),
        Ok(Value::structure([
            ("auto-fencing", Value::from(false)),
            ("starting", Value::from("MOST_LOADED")),
            ("conciliation", Value::from("USER")),
        ])),
        Ok(Value::Array(vec![
            address_info("10.0.0.1", "RUNNING"),
            address_info("10.0.0.2", "SILENT"),
        ])),
        Ok(address_info("10.0.0.2", "SILENT")),
        Ok(Value::Array(vec![application_info("web", "RUNNING")])),
        Ok(application_info("web", "STARTING")),
        Ok(application_rules("web")),
        Ok(Value::Array(vec![process_rules("web", "nginx")])),
    ]);
    let client = SupvisorsClient::new(&transport);

    assert_eq!(client.api_version().expect("version"), "1.0");
    assert_eq!(
        client.supvisors_state().expect("state").state,
        SupvisorsState::Operation
    );
    assert_eq!(client.master_address().expect("master"), "10.0.0.1");

    let strategies = client.strategies().expect("strategies");
    assert!(!strategies.auto_fencing);
    assert_eq!(strategies.starting, StartingStrategy::MostLoaded);
    assert_eq!(strategies.conciliation, ConciliationStrategy::User);

    let addresses = client.all_addresses_info().expect("addresses");
    assert_eq!(
        addresses.get("10.0.0.2").map(|address| address.state),
        Some(AddressState::Silent)
    );
    assert_eq!(client.address_info("10.0.0.2").expect("address").loading, 35);

    let applications = client.all_applications_info().expect("applications");
    assert_eq!(applications.len(), 1);
    let web = client.application_info("web").expect("application");
    assert_eq!(web.state, ApplicationState::Starting);
    assert!(web.minor_failure);

    let rules = client.application_rules("web").expect("rules");
    assert_eq!(rules.starting_failure_strategy, StartingFailureStrategy::Abort);
    assert_eq!(
        rules.running_failure_strategy,
        RunningFailureStrategy::RestartProcess
    );

    let process_rules = client.process_rules("web:nginx").expect("process rules");
    let nginx = process_rules.get("web:nginx").expect("keyed by namespec");
    assert!(nginx.required);
    assert_eq!(nginx.addresses, ["*"]);

    let methods: Vec<String> = transport.calls().into_iter().map(|c| c.method).collect();
    assert_eq!(
        methods,
        [
            "supvisors.get_api_version",
            "supvisors.get_supvisors_state",
            "supvisors.get_master_address",
            "supvisors.get_strategies",
            "supvisors.get_all_addresses_info",
            "supvisors.get_address_info",
            "supvisors.get_all_applications_info",
            "supvisors.get_application_info",
            "supvisors.get_application_rules",
            "supvisors.get_process_rules",
        ]
    );
}

#[rstest]
fn control_operations_send_documented_parameters() {
    let transport = RecordingTransport::default();
    let client = SupvisorsClient::new(&transport);
    let nginx = Namespec::of("web", "nginx").expect("valid namespec");

    client.stop_application("web", false).expect("stop application");
    client
        .restart_application(StartingStrategy::Local, "web", true)
        .expect("restart application");
    client.start_args(&nginx, "-v", false).expect("start args");
    client
        .start_process(StartingStrategy::MostLoaded, &nginx, "", true)
        .expect("start process");
    client.stop_process("nginx", true).expect("stop process");
    client
        .restart_process(StartingStrategy::Config, &nginx, "-q", false)
        .expect("restart process");
    client
        .conciliate(ConciliationStrategy::RunningFailure)
        .expect("conciliate");
    client.restart().expect("restart");
    client.shutdown().expect("shutdown");

    assert_eq!(
        transport.calls(),
        [
            call(
                "supvisors.stop_application",
                vec![Value::from("web"), Value::from(false)]
            ),
            call(
                "supvisors.restart_application",
                vec![Value::from(3_i32), Value::from("web"), Value::from(true)]
            ),
            call(
                "supvisors.start_args",
                vec![
                    Value::from("web:nginx"),
                    Value::from("-v"),
                    Value::from(false)
                ]
            ),
            call(
                "supvisors.start_process",
                vec![
                    Value::from(2_i32),
                    Value::from("web:nginx"),
                    Value::from(""),
                    Value::from(true)
                ]
            ),
            call(
                "supvisors.stop_process",
                vec![Value::from("nginx"), Value::from(true)]
            ),
            call(
                "supvisors.restart_process",
                vec![
                    Value::from(0_i32),
                    Value::from("web:nginx"),
                    Value::from("-q"),
                    Value::from(false)
                ]
            ),
            call("supvisors.conciliate", vec![Value::from(5_i32)]),
            call("supvisors.restart", Vec::new()),
            call("supvisors.shutdown", Vec::new()),
        ]
    );
}

#[rstest]
fn process_conflicts_are_visible_on_records() {
    let mut conflicting = process_info("web", "nginx", "RUNNING");
    if let Value::Struct(members) = &mut conflicting {
        members.insert(
            "addresses".to_owned(),
            Value::from(vec!["10.0.0.1", "10.0.0.2"]),
        );
    }
    let transport = RecordingTransport::replying(Value::Array(vec![conflicting]));
    let client = SupvisorsClient::new(&transport);

    let conflicts = client.conflicts().expect("conflicts");

    let nginx = conflicts.get("web:nginx").expect("keyed by namespec");
    assert!(nginx.is_conflicting());
    assert_eq!(nginx.extra_args.as_deref(), Some(""));
}
