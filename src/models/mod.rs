//! Domain Models
//!
//! Typed snapshots of manager replies. Every value is built once by the
//! mapper and owned by the caller; nothing here is cached or shared.

mod status;
mod storage;
mod s3;

pub use status::{Node, NodeStat, NodeType, Status, SystemInfo};
pub use storage::{AssignedFile, CompactionStatus, StorageStat};
pub use s3::{Bucket, Credential, Endpoint, LoginInfo, Role, User};

use serde::Serialize;

/// Timestamps as reported by the manager, offset preserved
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

/// Reply of a plain-text command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    /// The reply line, verbatim
    pub result: String,
}
