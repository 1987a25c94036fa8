//! Network Module
//!
//! Transport to the manager console.
//!
//! ## Architecture
//! - `Connector` opens a `Channel` to a manager address
//! - `Channel` carries one request line out and one reply line back
//! - `TcpConnector` / `Connection` are the TCP implementations

mod address;
mod connector;
mod connection;

pub use address::ManagerAddr;
pub use connector::{Channel, Connector, TcpConnector};
pub use connection::Connection;
