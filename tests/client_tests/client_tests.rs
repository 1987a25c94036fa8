//! Tests for ManagerClient
//!
//! These tests verify, against a scripted in-memory transport:
//! - Argument validation happens before any transport use
//! - Construction performs no I/O
//! - Request lines on the wire and mapping of replies
//! - Connection reuse and discard on failure

#[path = "../common/mod.rs"]
mod common;

use common::{StubConnector, STATUS_PAYLOAD};
use leofs_manager::mapper::Mapped;
use leofs_manager::models::NodeType;
use leofs_manager::{ClientConfig, CommandName, ManagerClient, ManagerError, Reply};

// =============================================================================
// Helper Functions
// =============================================================================

fn client_with(stub: &StubConnector) -> ManagerClient<StubConnector> {
    ManagerClient::with_connector("localhost:50000", ClientConfig::default(), stub.clone())
        .unwrap()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_without_address() {
    assert!(matches!(ManagerClient::new(""), Err(ManagerError::Argument(_))));
}

#[test]
fn test_new_with_malformed_address() {
    for bad in ["localhost", "localhost:port", ":50000"] {
        assert!(matches!(ManagerClient::new(bad), Err(ManagerError::Argument(_))));
    }
}

#[test]
fn test_new_performs_no_io() {
    // Nothing listens here; construction must still succeed
    let client = ManagerClient::new("localhost:50000").unwrap();
    assert_eq!(client.addr().to_string(), "localhost:50000");
    assert!(!client.is_connected());
}

#[test]
fn test_construction_does_not_connect() {
    let stub = StubConnector::new();
    let _client = client_with(&stub);
    assert_eq!(stub.invocations(), 0);
}

// =============================================================================
// Argument Validation Tests
// =============================================================================

#[test]
fn test_wrong_arity_never_touches_transport() {
    let stub = StubConnector::new();
    let client = client_with(&stub);

    for command in CommandName::ALL {
        let wrong = vec!["arg"; command.arity() + 1];
        let result = client.execute(command, &wrong);
        assert!(
            matches!(result, Err(ManagerError::Argument(_))),
            "{:?} accepted {} args",
            command,
            wrong.len()
        );

        if command.arity() > 0 {
            let wrong = vec!["arg"; command.arity() - 1];
            assert!(matches!(
                client.call(command, &wrong),
                Err(ManagerError::Argument(_))
            ));
        }
    }

    assert_eq!(stub.invocations(), 0);
}

#[test]
fn test_bad_token_never_touches_transport() {
    let stub = StubConnector::new();
    let client = client_with(&stub);

    assert!(matches!(
        client.whereis("bucket/a\nstatus"),
        Err(ManagerError::Argument(_))
    ));
    assert!(matches!(client.du(""), Err(ManagerError::Argument(_))));
    assert_eq!(stub.invocations(), 0);
}

// =============================================================================
// Request / Reply Tests
// =============================================================================

#[test]
fn test_status() {
    let stub = StubConnector::with_replies(&[STATUS_PAYLOAD]);
    let client = client_with(&stub);

    let status = client.status().unwrap();

    assert_eq!(stub.sent(), ["status"]);
    assert_eq!(status.system_info.unwrap().n, 1);
    let nodes = status.node_list.unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].node_type, NodeType::Storage);
}

#[test]
fn test_plain_text_reply_is_verbatim() {
    let stub = StubConnector::with_replies(&[" OK, detached\t"]);
    let client = client_with(&stub);

    let ack = client.detach("storage_0@127.0.0.1").unwrap();

    assert_eq!(ack.result, " OK, detached\t");
    assert_eq!(stub.sent(), ["detach storage_0@127.0.0.1"]);
}

#[test]
fn test_simple_commands_send_expected_lines() {
    let stub = StubConnector::new();
    for _ in 0..9 {
        stub.push_reply("OK");
    }
    let client = client_with(&stub);

    client.detach("n1").unwrap();
    client.resume("n1").unwrap();
    client.rebalance().unwrap();
    client.start().unwrap();
    client.compact("n1").unwrap();
    client.purge("b/k").unwrap();
    client.s3_set_endpoint("e1").unwrap();
    client.s3_del_endpoint("e1").unwrap();
    client.s3_add_bucket("b1", "o1").unwrap();

    assert_eq!(
        stub.sent(),
        [
            "detach n1",
            "resume n1",
            "rebalance",
            "start",
            "compact n1",
            "purge b/k",
            "s3_set_endpoint e1",
            "s3_del_endpoint e1",
            "s3_add_bucket b1 o1",
        ]
    );
}

#[test]
fn test_add_bucket_plain_reply() {
    let stub = StubConnector::with_replies(&["bucket1"]);
    let client = client_with(&stub);

    let reply = client
        .execute(CommandName::S3AddBucket, &["bucket1", "owner1"])
        .unwrap();

    assert_eq!(reply, Reply::PlainText("bucket1".to_string()));
    assert_eq!(reply.into_payload()["result"], "bucket1");
}

#[test]
fn test_structured_commands() {
    let stub = StubConnector::with_replies(&[
        r#"{"access_key_id":"ak","secret_access_key":"sk"}"#,
        r#"{"buckets":[{"bucket":"b1","owner":"o1","created_at":"2012-09-21 15:08:22 +0900"}]}"#,
        r#"{"endpoints":[]}"#,
        r#"{"user":{"id":"u1","role_id":1,"access_key_id":"ak","secret_key":"sk","created_at":"2013-01-23 11:12:13 +0900"}}"#,
    ]);
    let client = client_with(&stub);

    assert_eq!(client.s3_gen_key("u1").unwrap().secret_access_key, "sk");
    assert_eq!(client.s3_get_buckets().unwrap()[0].name, "b1");
    assert!(client.s3_get_endpoints().unwrap().is_empty());
    assert_eq!(client.login("u1", "secret").unwrap().id, "u1");

    assert_eq!(
        stub.sent(),
        ["s3_gen_key u1", "s3_get_buckets", "s3_get_endpoints", "login u1 secret"]
    );
}

#[test]
fn test_call_maps_by_category() {
    let stub = StubConnector::with_replies(&["OK", STATUS_PAYLOAD]);
    let client = client_with(&stub);

    assert!(matches!(
        client.call(CommandName::Rebalance, &[]).unwrap(),
        Mapped::Ack(ack) if ack.result == "OK"
    ));
    assert!(matches!(
        client.call(CommandName::Status, &[]).unwrap(),
        Mapped::Status(_)
    ));
}

#[test]
fn test_call_status_of_node_by_wire_name() {
    let stub = StubConnector::with_replies(&[r#"{"node_stat":{"version":"1.0.0","log_dir":"./log","ring_cur":"a","ring_prev":"b","vm_version":"5.9.1","total_mem_usage":1,"system_mem_usage":1,"procs_mem_usage":1,"ets_mem_usage":1,"num_of_procs":1,"limit_of_procs":1,"thread_pool_size":1,"kernel_poll":"true"}}"#]);
    let client = client_with(&stub);

    let args = ["storage_0@127.0.0.1"];
    let command = CommandName::resolve("status", args.len()).unwrap();
    let mapped = client.call(command, &args).unwrap();

    assert!(matches!(mapped, Mapped::Status(s) if s.node_stat.is_some()));
    assert_eq!(stub.sent(), ["status storage_0@127.0.0.1"]);
}

// =============================================================================
// Error Propagation Tests
// =============================================================================

#[test]
fn test_remote_error_object() {
    let stub = StubConnector::with_replies(&[r#"{"error":"bucket already exists"}"#]);
    let client = client_with(&stub);

    let result = client.s3_add_bucket("b1", "o1");
    assert!(matches!(result, Err(ManagerError::Remote(m)) if m == "bucket already exists"));
}

#[test]
fn test_text_reply_to_structured_command() {
    let stub = StubConnector::with_replies(&["Error: node not found"]);
    let client = client_with(&stub);

    let result = client.du("storage_9@127.0.0.1");
    assert!(matches!(result, Err(ManagerError::Remote(m)) if m == "Error: node not found"));
}

#[test]
fn test_malformed_reply() {
    let stub = StubConnector::with_replies(&["{\"system_info\":"]);
    let client = client_with(&stub);

    assert!(matches!(
        client.status(),
        Err(ManagerError::MalformedResponse { .. })
    ));
}

#[test]
fn test_connection_refused() {
    let stub = StubConnector::new();
    stub.refuse_connections();
    let client = client_with(&stub);

    assert!(matches!(client.rebalance(), Err(ManagerError::Connection(_))));
    assert!(stub.sent().is_empty());
}

#[test]
fn test_eof_is_connection_error() {
    let stub = StubConnector::new();
    stub.push_eof();
    let client = client_with(&stub);

    assert!(matches!(client.status(), Err(ManagerError::Connection(_))));
    assert!(!client.is_connected());
}

// =============================================================================
// Connection Lifecycle Tests
// =============================================================================

#[test]
fn test_connection_reused_between_calls() {
    let stub = StubConnector::with_replies(&["OK", "OK", "OK"]);
    let client = client_with(&stub);

    client.rebalance().unwrap();
    client.rebalance().unwrap();
    client.rebalance().unwrap();

    assert_eq!(stub.connects(), 1);
    assert!(client.is_connected());
}

#[test]
fn test_connection_per_call_when_reuse_disabled() {
    let stub = StubConnector::with_replies(&["OK", "OK"]);
    let config = ClientConfig::builder().reuse_connection(false).build();
    let client =
        ManagerClient::with_connector("localhost:50000", config, stub.clone()).unwrap();

    client.rebalance().unwrap();
    client.rebalance().unwrap();

    assert_eq!(stub.connects(), 2);
    assert!(!client.is_connected());
}

#[test]
fn test_reconnect_after_transport_failure() {
    let stub = StubConnector::new();
    stub.push_eof();
    stub.push_reply("OK");
    let client = client_with(&stub);

    assert!(client.rebalance().is_err());
    assert_eq!(client.rebalance().unwrap().result, "OK");
    assert_eq!(stub.connects(), 2);
}

#[test]
fn test_mapping_failure_keeps_connection() {
    let stub = StubConnector::with_replies(&[r#"{"access_key_id":"ak"}"#, "OK"]);
    let client = client_with(&stub);

    assert!(matches!(
        client.s3_gen_key("u1"),
        Err(ManagerError::MissingField(_))
    ));
    assert!(client.is_connected());
    client.rebalance().unwrap();
    assert_eq!(stub.connects(), 1);
}

#[test]
fn test_close_drops_idle_connection() {
    let stub = StubConnector::with_replies(&["OK"]);
    let client = client_with(&stub);

    client.start().unwrap();
    assert!(client.is_connected());
    client.close();
    assert!(!client.is_connected());
}
