//! Users, credentials, endpoints and buckets

use serde::Serialize;

use super::Timestamp;
use crate::error::{ManagerError, Result};

/// Access role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    General,
    Admin,
}

impl Role {
    /// Resolve a role id; only 1 and 9 exist
    pub fn from_id(role_id: i64) -> Result<Self> {
        match role_id {
            1 => Ok(Role::General),
            9 => Ok(Role::Admin),
            other => Err(ManagerError::RoleLookup(other)),
        }
    }

    pub fn id(self) -> i64 {
        match self {
            Role::General => 1,
            Role::Admin => 9,
        }
    }
}

/// S3 key pair (`s3_gen_key`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Reply of `login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginInfo {
    pub id: String,
    pub role_id: i64,
    pub access_key_id: String,
    pub secret_key: String,
    pub created_at: Timestamp,
}

impl LoginInfo {
    pub fn role(&self) -> Result<Role> {
        Role::from_id(self.role_id)
    }
}

/// Entry of `get_users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub role_id: i64,
    pub access_key_id: String,
    pub created_at: Timestamp,
}

impl User {
    pub fn role(&self) -> Result<Role> {
        Role::from_id(self.role_id)
    }
}

/// S3 endpoint (host name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub endpoint: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub name: String,
    pub owner: String,
    pub created_at: Timestamp,
}
