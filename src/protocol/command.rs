//! Command catalog
//!
//! Every command the manager console understands, with the exact number of
//! arguments it takes and the shape of its reply.

use std::fmt;
use std::str::FromStr;

use crate::error::{ManagerError, Result};

/// How a command's reply is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Free-text acknowledgement, exposed as `Ack`
    PlainText,

    /// JSON document mapped into a domain entity
    Structured,
}

/// Catalog entry for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Name written on the wire
    pub wire_name: &'static str,

    /// Exact number of arguments
    pub arity: usize,

    pub response: ResponseKind,
}

impl CommandSpec {
    const fn new(wire_name: &'static str, arity: usize, response: ResponseKind) -> Self {
        Self {
            wire_name,
            arity,
            response,
        }
    }
}

/// Commands in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    // -------------------------------------------------------------------------
    // Node lifecycle
    // -------------------------------------------------------------------------
    Detach,
    Resume,
    Rebalance,
    Start,

    // -------------------------------------------------------------------------
    // Cluster & storage inspection
    // -------------------------------------------------------------------------
    Status,
    /// `status <node>`: status of a single node, including its `node_stat`
    StatusOf,
    Whereis,
    Du,

    // -------------------------------------------------------------------------
    // Compaction
    // -------------------------------------------------------------------------
    Compact,
    CompactStatus,
    Purge,

    // -------------------------------------------------------------------------
    // Users & credentials
    // -------------------------------------------------------------------------
    S3GenKey,
    Login,
    GetUsers,

    // -------------------------------------------------------------------------
    // Endpoints & buckets
    // -------------------------------------------------------------------------
    S3SetEndpoint,
    S3DelEndpoint,
    S3GetEndpoints,
    S3AddBucket,
    S3GetBuckets,
}

impl CommandName {
    /// Every command, in catalog order
    pub const ALL: [CommandName; 19] = [
        CommandName::Detach,
        CommandName::Resume,
        CommandName::Rebalance,
        CommandName::Start,
        CommandName::Status,
        CommandName::StatusOf,
        CommandName::Whereis,
        CommandName::Du,
        CommandName::Compact,
        CommandName::CompactStatus,
        CommandName::Purge,
        CommandName::S3GenKey,
        CommandName::Login,
        CommandName::GetUsers,
        CommandName::S3SetEndpoint,
        CommandName::S3DelEndpoint,
        CommandName::S3GetEndpoints,
        CommandName::S3AddBucket,
        CommandName::S3GetBuckets,
    ];

    /// Look up the catalog entry for this command
    pub const fn spec(self) -> CommandSpec {
        use ResponseKind::{PlainText, Structured};

        match self {
            CommandName::Detach => CommandSpec::new("detach", 1, PlainText),
            CommandName::Resume => CommandSpec::new("resume", 1, PlainText),
            CommandName::Rebalance => CommandSpec::new("rebalance", 0, PlainText),
            CommandName::Start => CommandSpec::new("start", 0, PlainText),
            CommandName::Status => CommandSpec::new("status", 0, Structured),
            CommandName::StatusOf => CommandSpec::new("status", 1, Structured),
            CommandName::Whereis => CommandSpec::new("whereis", 1, Structured),
            CommandName::Du => CommandSpec::new("du", 1, Structured),
            CommandName::Compact => CommandSpec::new("compact", 1, PlainText),
            CommandName::CompactStatus => CommandSpec::new("compact_status", 1, Structured),
            CommandName::Purge => CommandSpec::new("purge", 1, PlainText),
            CommandName::S3GenKey => CommandSpec::new("s3_gen_key", 1, Structured),
            CommandName::Login => CommandSpec::new("login", 2, Structured),
            CommandName::GetUsers => CommandSpec::new("get_users", 0, Structured),
            CommandName::S3SetEndpoint => CommandSpec::new("s3_set_endpoint", 1, PlainText),
            CommandName::S3DelEndpoint => CommandSpec::new("s3_del_endpoint", 1, PlainText),
            CommandName::S3GetEndpoints => CommandSpec::new("s3_get_endpoints", 0, Structured),
            CommandName::S3AddBucket => CommandSpec::new("s3_add_bucket", 2, PlainText),
            CommandName::S3GetBuckets => CommandSpec::new("s3_get_buckets", 0, Structured),
        }
    }

    /// Name written on the wire
    pub fn wire_name(self) -> &'static str {
        self.spec().wire_name
    }

    /// Exact number of arguments the command takes
    pub fn arity(self) -> usize {
        self.spec().arity
    }

    pub fn response_kind(self) -> ResponseKind {
        self.spec().response
    }

    /// Fail with `Argument` unless `argc` matches the catalog arity
    pub fn check_arity(self, argc: usize) -> Result<()> {
        let expected = self.arity();
        if argc != expected {
            return Err(ManagerError::Argument(format!(
                "`{}` takes {} argument(s), got {}",
                self.wire_name(),
                expected,
                argc
            )));
        }
        Ok(())
    }

    /// Resolve a wire name for a call with `argc` arguments
    ///
    /// `status` is shared by the cluster-wide and the per-node forms; the
    /// form whose arity matches `argc` wins. Arity is not checked here.
    pub fn resolve(name: &str, argc: usize) -> Result<Self> {
        let mut candidates = CommandName::ALL
            .iter()
            .copied()
            .filter(|command| command.wire_name() == name)
            .peekable();
        let first = candidates
            .peek()
            .copied()
            .ok_or_else(|| ManagerError::Argument(format!("Unknown command: `{}`", name)))?;
        Ok(candidates
            .find(|command| command.arity() == argc)
            .unwrap_or(first))
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for CommandName {
    type Err = ManagerError;

    /// Resolve a wire name. `status` resolves to the cluster-wide form.
    fn from_str(name: &str) -> Result<Self> {
        CommandName::ALL
            .iter()
            .copied()
            .find(|command| command.wire_name() == name)
            .ok_or_else(|| ManagerError::Argument(format!("Unknown command: `{}`", name)))
    }
}
