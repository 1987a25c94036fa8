//! Tests for mapping placement, usage, user, endpoint and bucket replies

use chrono::DateTime;
use leofs_manager::mapper::{
    map_list, FromPayload, ASSIGNED_INFO_KEY, BUCKETS_KEY, ENDPOINTS_KEY, USERS_KEY,
};
use leofs_manager::models::{
    AssignedFile, Bucket, CompactionStatus, Credential, Endpoint, LoginInfo, Role, StorageStat,
    User,
};
use leofs_manager::{ManagerError, Reply};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn assigned_file_payload(timestamp: &str, delete: Value) -> Value {
    json!({
        "node": "storage_0@127.0.0.1",
        "vnode_id": "1078016747",
        "size": 14,
        "clock": "1348221023472567",
        "checksum": "296789406342069856937436342117937416018",
        "timestamp": timestamp,
        "delete": delete,
        "num_of_chunks": "0"
    })
}

// =============================================================================
// AssignedFile Tests
// =============================================================================

#[test]
fn test_assigned_file() {
    let payload = assigned_file_payload("2012-09-21 18:50:23 +0900", json!(0));
    let file = AssignedFile::from_payload(&payload).unwrap();

    assert_eq!(file.node, "storage_0@127.0.0.1");
    assert_eq!(file.vnode_id, "1078016747");
    assert_eq!(file.size, 14);
    assert_eq!(file.num_of_chunks, 0);
    assert!(!file.delete);
    assert_eq!(
        file.timestamp,
        Some(DateTime::parse_from_rfc3339("2012-09-21T18:50:23+09:00").unwrap())
    );
}

#[test]
fn test_assigned_file_empty_timestamp_is_absent() {
    let payload = assigned_file_payload("", json!(0));
    let file = AssignedFile::from_payload(&payload).unwrap();
    assert_eq!(file.timestamp, None);
}

#[test]
fn test_assigned_file_malformed_timestamp() {
    let payload = assigned_file_payload("not a time", json!(0));
    assert!(matches!(
        AssignedFile::from_payload(&payload),
        Err(ManagerError::Format(_))
    ));
}

#[test]
fn test_assigned_file_missing_timestamp() {
    let mut payload = assigned_file_payload("", json!(0));
    payload.as_object_mut().unwrap().remove("timestamp");
    assert!(matches!(
        AssignedFile::from_payload(&payload),
        Err(ManagerError::MissingField(f)) if f == "timestamp"
    ));
}

#[test]
fn test_assigned_file_delete_flag() {
    let cases = [
        (json!(0), false),
        (json!(1), true),
        (json!(2), true),
        (json!("0"), false),
        (json!("1"), true),
    ];
    for (code, expected) in cases {
        let payload = assigned_file_payload("", code.clone());
        let file = AssignedFile::from_payload(&payload).unwrap();
        assert_eq!(file.delete, expected, "delete code {}", code);
    }
}

#[test]
fn test_assigned_file_boolean_delete_rejected() {
    for flag in [json!(true), json!(false)] {
        let payload = assigned_file_payload("", flag);
        assert!(matches!(
            AssignedFile::from_payload(&payload),
            Err(ManagerError::Format(m)) if m.contains("delete")
        ));
    }
}

#[test]
fn test_whereis_reply() {
    let reply = Reply::Structured(json!({
        "assigned_info": [
            assigned_file_payload("", json!(0)),
            assigned_file_payload("2012-09-21 18:50:23 +0900", json!(1)),
        ]
    }));
    let files: Vec<AssignedFile> = map_list(reply, ASSIGNED_INFO_KEY).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0].timestamp.is_none());
    assert!(files[1].delete);
}

// =============================================================================
// StorageStat / CompactionStatus Tests
// =============================================================================

#[test]
fn test_storage_stat() {
    let payload = json!({
        "active_num_of_objects": 10,
        "total_num_of_objects": "12",
        "active_size_of_objects": 4096,
        "total_size_of_objects": 5120,
        "ratio_of_active_size": "80.0",
        "last_compaction_start": "2013-03-04 12:39:47 +0900",
        "last_compaction_end": "____-__-__ __:__:__"
    });
    let stat = StorageStat::from_payload(&payload).unwrap();

    assert_eq!(stat.active_num_of_objects, 10);
    assert_eq!(stat.total_num_of_objects, 12);
    assert_eq!(stat.total_size_of_objects, 5120);
    assert_eq!(stat.ratio_of_active_size, Some(80.0));
    assert_eq!(stat.last_compaction_end, "____-__-__ __:__:__");
}

#[test]
fn test_storage_stat_without_ratio() {
    let payload = json!({
        "active_num_of_objects": 0,
        "total_num_of_objects": 0,
        "active_size_of_objects": 0,
        "total_size_of_objects": 0,
        "last_compaction_start": "",
        "last_compaction_end": ""
    });
    let stat = StorageStat::from_payload(&payload).unwrap();
    assert_eq!(stat.ratio_of_active_size, None);
}

#[test]
fn test_storage_stat_negative_count() {
    let payload = json!({
        "active_num_of_objects": -1,
        "total_num_of_objects": 0,
        "active_size_of_objects": 0,
        "total_size_of_objects": 0,
        "last_compaction_start": "",
        "last_compaction_end": ""
    });
    assert!(matches!(
        StorageStat::from_payload(&payload),
        Err(ManagerError::Format(_))
    ));
}

#[test]
fn test_compaction_status() {
    let payload = json!({
        "status": "running",
        "last_compaction_start": "2013-03-04 12:39:47 +0900",
        "total_targets": 64,
        "num_of_pending_targets": 60,
        "num_of_ongoing_targets": 1,
        "num_of_out_of_targets": 3
    });
    let status = CompactionStatus::from_payload(&payload).unwrap();
    assert_eq!(status.status, "running");
    assert_eq!(status.total_targets, 64);
    assert_eq!(status.num_of_pending_targets, 60);
    assert_eq!(status.num_of_ongoing_targets, 1);
    assert_eq!(status.num_of_out_of_targets, 3);
}

// =============================================================================
// Credential / User Tests
// =============================================================================

#[test]
fn test_credential() {
    let payload = json!({
        "access_key_id": "05236",
        "secret_access_key": "802562235"
    });
    let credential = Credential::from_payload(&payload).unwrap();
    assert_eq!(credential.access_key_id, "05236");
    assert_eq!(credential.secret_access_key, "802562235");
}

#[test]
fn test_credential_missing_secret() {
    let payload = json!({ "access_key_id": "05236" });
    assert!(matches!(
        Credential::from_payload(&payload),
        Err(ManagerError::MissingField(f)) if f == "secret_access_key"
    ));
}

#[test]
fn test_login_info() {
    let payload = json!({
        "user": {
            "id": "admin",
            "role_id": 9,
            "access_key_id": "05236",
            "secret_key": "802562235",
            "created_at": "2013-01-23 11:12:13 +0900"
        }
    });
    let login = LoginInfo::from_payload(&payload).unwrap();
    assert_eq!(login.id, "admin");
    assert_eq!(login.role_id, 9);
    assert_eq!(login.role().unwrap(), Role::Admin);
}

#[test]
fn test_login_info_without_user() {
    assert!(matches!(
        LoginInfo::from_payload(&json!({})),
        Err(ManagerError::MissingField(f)) if f == "user"
    ));
}

#[test]
fn test_users_and_roles() {
    let reply = Reply::Structured(json!({
        "users": [
            {"user_id": "alice", "role_id": 1, "access_key_id": "a1",
             "created_at": "2013-01-23 11:12:13 +0900"},
            {"user_id": "root", "role_id": "9", "access_key_id": "r1",
             "created_at": "2013-01-23 11:12:14 +0900"},
            {"user_id": "ghost", "role_id": 5, "access_key_id": "g1",
             "created_at": "2013-01-23 11:12:15 +0900"}
        ]
    }));
    let users: Vec<User> = map_list(reply, USERS_KEY).unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].id, "alice");
    assert_eq!(users[0].role().unwrap(), Role::General);
    assert_eq!(users[1].role().unwrap(), Role::Admin);
    assert!(matches!(users[2].role(), Err(ManagerError::RoleLookup(5))));
}

// =============================================================================
// Endpoint / Bucket Tests
// =============================================================================

#[test]
fn test_endpoints() {
    let reply = Reply::Structured(json!({
        "endpoints": [
            {"endpoint": "localhost", "created_at": "2012-09-21 15:08:22 +0900"},
            {"endpoint": "s3.amazonaws.com", "created_at": "2012-09-21 15:08:23 +0900"}
        ]
    }));
    let endpoints: Vec<Endpoint> = map_list(reply, ENDPOINTS_KEY).unwrap();
    assert_eq!(endpoints[0].endpoint, "localhost");
    assert_eq!(endpoints[1].endpoint, "s3.amazonaws.com");
}

#[test]
fn test_endpoint_bad_created_at() {
    let payload = json!({"endpoint": "localhost", "created_at": ""});
    assert!(matches!(
        Endpoint::from_payload(&payload),
        Err(ManagerError::Format(_))
    ));
}

#[test]
fn test_buckets() {
    let reply = Reply::Structured(json!({
        "buckets": [
            {"bucket": "photos", "owner": "alice", "created_at": "2012-09-21 15:08:22 +0900"}
        ]
    }));
    let buckets: Vec<Bucket> = map_list(reply, BUCKETS_KEY).unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].name, "photos");
    assert_eq!(buckets[0].owner, "alice");
    assert_eq!(
        buckets[0].created_at,
        DateTime::parse_from_rfc3339("2012-09-21T15:08:22+09:00").unwrap()
    );
}

#[test]
fn test_bucket_list_entry_not_an_object() {
    let reply = Reply::Structured(json!({ "buckets": ["photos"] }));
    assert!(matches!(
        map_list::<Bucket>(reply, BUCKETS_KEY),
        Err(ManagerError::Format(_))
    ));
}
