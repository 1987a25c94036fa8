//! Result Mapper
//!
//! Turns decoded replies into domain models.
//!
//! ## Dispatch
//! - Plain-text commands map to [`Ack`]
//! - Structured commands map to one entity, or to a list found under a
//!   collection key (or sent as a bare JSON array)
//!
//! A structured command answered with free text is the manager refusing
//! the request, and surfaces as `Remote`.

mod fields;
mod status;
mod storage;
mod s3;

pub use fields::Fields;

use chrono::DateTime;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ManagerError, Result};
use crate::models::{
    Ack, AssignedFile, Bucket, CompactionStatus, Credential, Endpoint, LoginInfo, Status,
    StorageStat, Timestamp, User,
};
use crate::protocol::{CommandName, Reply, ResponseKind, RESULT_KEY};

/// Format the manager uses for timestamps: `2012-09-21 15:08:22 +0900`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

// =============================================================================
// Collection keys
// =============================================================================

pub const ASSIGNED_INFO_KEY: &str = "assigned_info";
pub const USERS_KEY: &str = "users";
pub const ENDPOINTS_KEY: &str = "endpoints";
pub const BUCKETS_KEY: &str = "buckets";

/// Build a model from a decoded JSON payload
pub trait FromPayload: Sized {
    fn from_payload(payload: &Value) -> Result<Self>;
}

/// Parse a manager timestamp, falling back to RFC 3339
pub fn parse_timestamp(raw: &str) -> Result<Timestamp> {
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map_err(|e| ManagerError::Format(format!("invalid timestamp `{}`: {}", raw, e)))
}

// =============================================================================
// Dispatch
// =============================================================================

/// Map the reply of a plain-text command
pub fn map_ack(reply: Reply) -> Result<Ack> {
    Ack::from_payload(&reply.into_payload())
}

/// Map the reply of a structured command into a single model
pub fn map_entity<T: FromPayload>(reply: Reply) -> Result<T> {
    let payload = structured(reply)?;
    T::from_payload(&payload)
}

/// Map the reply of a structured command into a list of models
///
/// Order is preserved exactly as received.
pub fn map_list<T: FromPayload>(reply: Reply, key: &'static str) -> Result<Vec<T>> {
    let payload = structured(reply)?;
    let items = match &payload {
        Value::Array(items) => items.as_slice(),
        other => Fields::of(key, other)?.list(key)?,
    };
    items.iter().map(T::from_payload).collect()
}

/// Unwrap a JSON reply; free text in its place is a refusal
fn structured(reply: Reply) -> Result<Value> {
    match reply {
        Reply::Structured(value) => Ok(value),
        Reply::PlainText(line) => Err(ManagerError::Remote(line)),
    }
}

/// Any mapped reply, for callers that pick the command at runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mapped {
    Ack(Ack),
    Status(Status),
    AssignedFiles(Vec<AssignedFile>),
    StorageStat(StorageStat),
    CompactionStatus(CompactionStatus),
    Credential(Credential),
    LoginInfo(LoginInfo),
    Users(Vec<User>),
    Endpoints(Vec<Endpoint>),
    Buckets(Vec<Bucket>),
}

/// Map a reply according to the category of the command that produced it
///
/// Plain-text commands are recognised from the catalog; only structured
/// commands need an entity here.
pub fn map_reply(command: CommandName, reply: Reply) -> Result<Mapped> {
    if command.response_kind() == ResponseKind::PlainText {
        return map_ack(reply).map(Mapped::Ack);
    }
    match command {
        CommandName::Status | CommandName::StatusOf => map_entity(reply).map(Mapped::Status),
        CommandName::Whereis => map_list(reply, ASSIGNED_INFO_KEY).map(Mapped::AssignedFiles),
        CommandName::Du => map_entity(reply).map(Mapped::StorageStat),
        CommandName::CompactStatus => map_entity(reply).map(Mapped::CompactionStatus),
        CommandName::S3GenKey => map_entity(reply).map(Mapped::Credential),
        CommandName::Login => map_entity(reply).map(Mapped::LoginInfo),
        CommandName::GetUsers => map_list(reply, USERS_KEY).map(Mapped::Users),
        CommandName::S3GetEndpoints => map_list(reply, ENDPOINTS_KEY).map(Mapped::Endpoints),
        CommandName::S3GetBuckets => map_list(reply, BUCKETS_KEY).map(Mapped::Buckets),
        other => Err(ManagerError::Argument(format!(
            "no entity mapping for structured command `{}`",
            other
        ))),
    }
}

impl FromPayload for Ack {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("ack", payload)?;
        Ok(Ack {
            result: fields.string(RESULT_KEY)?,
        })
    }
}
