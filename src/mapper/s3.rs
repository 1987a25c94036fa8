//! User, credential, endpoint and bucket reply mapping

use serde_json::Value;

use crate::error::Result;
use crate::models::{Bucket, Credential, Endpoint, LoginInfo, User};
use super::{Fields, FromPayload};

impl FromPayload for Credential {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("credential", payload)?;

        Ok(Credential {
            access_key_id: fields.string("access_key_id")?,
            secret_access_key: fields.string("secret_access_key")?,
        })
    }
}

impl FromPayload for LoginInfo {
    /// The login reply nests the account under `user`
    fn from_payload(payload: &Value) -> Result<Self> {
        let user = Fields::of("login", payload)?.object("user", "user")?;

        Ok(LoginInfo {
            id: user.string("id")?,
            role_id: user.i64("role_id")?,
            access_key_id: user.string("access_key_id")?,
            secret_key: user.string("secret_key")?,
            created_at: user.timestamp("created_at")?,
        })
    }
}

impl FromPayload for User {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("user", payload)?;

        Ok(User {
            id: fields.string("user_id")?,
            role_id: fields.i64("role_id")?,
            access_key_id: fields.string("access_key_id")?,
            created_at: fields.timestamp("created_at")?,
        })
    }
}

impl FromPayload for Endpoint {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("endpoint", payload)?;

        Ok(Endpoint {
            endpoint: fields.string("endpoint")?,
            created_at: fields.timestamp("created_at")?,
        })
    }
}

impl FromPayload for Bucket {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("bucket", payload)?;

        Ok(Bucket {
            name: fields.string("bucket")?,
            owner: fields.string("owner")?,
            created_at: fields.timestamp("created_at")?,
        })
    }
}
