//! Manager address
//!
//! Parsed form of the `"host:port"` string a client is built from.
//! Parsing never touches the network.

use std::fmt;
use std::str::FromStr;

use crate::error::{ManagerError, Result};

/// A validated `host:port` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerAddr {
    host: String,
    port: u16,
}

impl ManagerAddr {
    /// Parse `"host:port"`; IPv6 hosts may be bracketed (`"[::1]:10010"`)
    pub fn parse(addr: &str) -> Result<Self> {
        let addr = addr.trim();
        if addr.is_empty() {
            return Err(ManagerError::Argument(
                "manager address is required (host:port)".to_string(),
            ));
        }

        let (host, port) = addr.rsplit_once(':').ok_or_else(|| {
            ManagerError::Argument(format!("manager address `{}` is not host:port", addr))
        })?;

        let host = host.trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() {
            return Err(ManagerError::Argument(format!(
                "manager address `{}` has an empty host",
                addr
            )));
        }

        let port: u16 = port.parse().map_err(|_| {
            ManagerError::Argument(format!("manager address `{}` has an invalid port", addr))
        })?;
        if port == 0 {
            return Err(ManagerError::Argument(format!(
                "manager address `{}` has port 0",
                addr
            )));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl FromStr for ManagerAddr {
    type Err = ManagerError;

    fn from_str(addr: &str) -> Result<Self> {
        ManagerAddr::parse(addr)
    }
}

impl fmt::Display for ManagerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
