//! Manager Client
//!
//! The facade that callers use: one method per catalog command.
//!
//! ## Responsibilities
//! - Validate arguments against the catalog before any I/O
//! - Encode the request line and run one round trip
//! - Decode the reply and map it into a model
//!
//! ## Concurrency Model
//! The protocol has no request ids, so a round trip (send + receive) runs
//! under one lock. A client holds at most one idle connection; it is taken
//! out for the call and put back only after a clean exchange. Any transport
//! failure drops (closes) it and the next call reconnects. Nothing is retried.

use parking_lot::Mutex;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::mapper::{
    self, map_ack, map_entity, map_list, Mapped, ASSIGNED_INFO_KEY, BUCKETS_KEY, ENDPOINTS_KEY,
    USERS_KEY,
};
use crate::models::{
    Ack, AssignedFile, Bucket, CompactionStatus, Credential, Endpoint, LoginInfo, Status,
    StorageStat, User,
};
use crate::network::{Channel, Connector, ManagerAddr, TcpConnector};
use crate::protocol::{decode_reply, encode_request, CommandName, Reply};

/// Client for one manager node
pub struct ManagerClient<C: Connector = TcpConnector> {
    /// Manager address, validated at construction
    addr: ManagerAddr,

    config: ClientConfig,

    /// Opens connections on demand
    connector: C,

    /// Idle connection between calls; held locked for a whole round trip
    channel: Mutex<Option<C::Channel>>,
}

impl ManagerClient {
    /// Create a client for `"host:port"`
    ///
    /// Only validates the address; no connection is made until the first call.
    pub fn new(addr: &str) -> Result<Self> {
        Self::with_config(addr, ClientConfig::default())
    }

    /// Create a client with explicit transport settings
    pub fn with_config(addr: &str, config: ClientConfig) -> Result<Self> {
        let connector = TcpConnector::new(config.clone());
        Self::with_connector(addr, config, connector)
    }
}

impl<C: Connector> ManagerClient<C> {
    /// Create a client that opens its channels through `connector`
    pub fn with_connector(addr: &str, config: ClientConfig, connector: C) -> Result<Self> {
        let addr = ManagerAddr::parse(addr)?;
        Ok(Self {
            addr,
            config,
            connector,
            channel: Mutex::new(None),
        })
    }

    pub fn addr(&self) -> &ManagerAddr {
        &self.addr
    }

    /// True when an idle connection is being kept for the next call
    pub fn is_connected(&self) -> bool {
        self.channel.lock().is_some()
    }

    /// Drop the idle connection, if any
    pub fn close(&self) {
        if self.channel.lock().take().is_some() {
            tracing::debug!("Closed idle connection to {}", self.addr);
        }
    }

    // =========================================================================
    // Generic entry points
    // =========================================================================

    /// Send any catalog command and return the decoded, unmapped reply
    pub fn execute(&self, command: CommandName, args: &[&str]) -> Result<Reply> {
        let line = encode_request(command, args)?;
        self.round_trip(&line)
    }

    /// Send any catalog command and map the reply by command category
    pub fn call(&self, command: CommandName, args: &[&str]) -> Result<Mapped> {
        let reply = self.execute(command, args)?;
        mapper::map_reply(command, reply)
    }

    /// One request line out, one reply line back
    fn round_trip(&self, line: &str) -> Result<Reply> {
        let mut slot = self.channel.lock();

        let mut channel = match slot.take() {
            Some(channel) => channel,
            None => self.connector.connect(&self.addr)?,
        };

        let reply_line = match channel.send_line(line).and_then(|()| channel.recv_line()) {
            Ok(reply_line) => reply_line,
            Err(e) => {
                tracing::debug!("Round trip to {} failed ({}): {}", self.addr, line, e);
                return Err(e);
            }
        };

        if self.config.reuse_connection {
            *slot = Some(channel);
        }
        drop(slot);

        decode_reply(&reply_line)
    }

    // =========================================================================
    // Node lifecycle
    // =========================================================================

    /// Remove a node from the cluster
    pub fn detach(&self, node: &str) -> Result<Ack> {
        map_ack(self.execute(CommandName::Detach, &[node])?)
    }

    /// Bring a suspended node back
    pub fn resume(&self, node: &str) -> Result<Ack> {
        map_ack(self.execute(CommandName::Resume, &[node])?)
    }

    /// Redistribute objects after membership changes
    pub fn rebalance(&self) -> Result<Ack> {
        map_ack(self.execute(CommandName::Rebalance, &[])?)
    }

    /// Start the cluster
    pub fn start(&self) -> Result<Ack> {
        map_ack(self.execute(CommandName::Start, &[])?)
    }

    // =========================================================================
    // Cluster & storage inspection
    // =========================================================================

    /// Cluster status: system info and the node list
    pub fn status(&self) -> Result<Status> {
        map_entity(self.execute(CommandName::Status, &[])?)
    }

    /// Status of a single node, including its runtime statistics
    pub fn status_of(&self, node: &str) -> Result<Status> {
        map_entity(self.execute(CommandName::StatusOf, &[node])?)
    }

    /// Replicas of the object at `path`
    pub fn whereis(&self, path: &str) -> Result<Vec<AssignedFile>> {
        map_list(self.execute(CommandName::Whereis, &[path])?, ASSIGNED_INFO_KEY)
    }

    /// Storage usage of a storage node
    pub fn du(&self, node: &str) -> Result<StorageStat> {
        map_entity(self.execute(CommandName::Du, &[node])?)
    }

    // =========================================================================
    // Compaction
    // =========================================================================

    pub fn compact(&self, node: &str) -> Result<Ack> {
        map_ack(self.execute(CommandName::Compact, &[node])?)
    }

    pub fn compact_status(&self, node: &str) -> Result<CompactionStatus> {
        map_entity(self.execute(CommandName::CompactStatus, &[node])?)
    }

    /// Remove the cached object at `path` from the gateways
    pub fn purge(&self, path: &str) -> Result<Ack> {
        map_ack(self.execute(CommandName::Purge, &[path])?)
    }

    // =========================================================================
    // Users & credentials
    // =========================================================================

    /// Generate an S3 key pair for `user_id`
    pub fn s3_gen_key(&self, user_id: &str) -> Result<Credential> {
        map_entity(self.execute(CommandName::S3GenKey, &[user_id])?)
    }

    pub fn login(&self, user_id: &str, password: &str) -> Result<LoginInfo> {
        map_entity(self.execute(CommandName::Login, &[user_id, password])?)
    }

    pub fn get_users(&self) -> Result<Vec<User>> {
        map_list(self.execute(CommandName::GetUsers, &[])?, USERS_KEY)
    }

    // =========================================================================
    // Endpoints & buckets
    // =========================================================================

    pub fn s3_set_endpoint(&self, endpoint: &str) -> Result<Ack> {
        map_ack(self.execute(CommandName::S3SetEndpoint, &[endpoint])?)
    }

    pub fn s3_del_endpoint(&self, endpoint: &str) -> Result<Ack> {
        map_ack(self.execute(CommandName::S3DelEndpoint, &[endpoint])?)
    }

    pub fn s3_get_endpoints(&self) -> Result<Vec<Endpoint>> {
        map_list(self.execute(CommandName::S3GetEndpoints, &[])?, ENDPOINTS_KEY)
    }

    pub fn s3_add_bucket(&self, bucket: &str, owner: &str) -> Result<Ack> {
        map_ack(self.execute(CommandName::S3AddBucket, &[bucket, owner])?)
    }

    pub fn s3_get_buckets(&self) -> Result<Vec<Bucket>> {
        map_list(self.execute(CommandName::S3GetBuckets, &[])?, BUCKETS_KEY)
    }
}
