//! Transport seams
//!
//! The client only needs "open a channel" and "one line out, one line in".
//! Tests substitute their own implementations.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::network::{Connection, ManagerAddr};

/// A bidirectional, line-delimited channel to the manager
pub trait Channel {
    /// Send one request line; the channel appends the terminator
    fn send_line(&mut self, line: &str) -> Result<()>;

    /// Receive one reply line with its terminator stripped
    fn recv_line(&mut self) -> Result<String>;
}

/// Opens channels to a manager
pub trait Connector: Send + Sync {
    type Channel: Channel + Send;

    fn connect(&self, addr: &ManagerAddr) -> Result<Self::Channel>;
}

/// Plain TCP connector
#[derive(Debug, Clone, Default)]
pub struct TcpConnector {
    config: ClientConfig,
}

impl TcpConnector {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl Connector for TcpConnector {
    type Channel = Connection;

    fn connect(&self, addr: &ManagerAddr) -> Result<Connection> {
        Connection::open(addr, &self.config)
    }
}
