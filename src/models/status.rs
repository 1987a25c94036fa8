//! Cluster status models

use serde::Serialize;

use super::Timestamp;

/// Reply of `status` / `status <node>`
///
/// Each part is present only when the manager sent it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub node_stat: Option<NodeStat>,
    pub system_info: Option<SystemInfo>,
    /// Nodes in ring traversal order, as received
    pub node_list: Option<Vec<Node>>,
}

/// Cluster-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub version: String,
    pub ring_size: u32,
    pub ring_cur: String,
    pub ring_prev: String,

    /// Number of replicas
    pub n: u32,
    /// Replicas needed for a successful READ
    pub r: u32,
    /// Replicas needed for a successful WRITE
    pub w: u32,
    /// Replicas needed for a successful DELETE
    pub d: u32,
}

/// Role of a cluster member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeType {
    Storage,
    Gateway,
}

impl NodeType {
    /// Decode the one-letter wire code (`S` / `G`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(NodeType::Storage),
            "G" => Some(NodeType::Gateway),
            _ => None,
        }
    }
}

/// One member of the cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub node_type: NodeType,
    pub node: String,
    pub state: String,
    pub ring_cur: String,
    pub ring_prev: String,
    pub joined_at: Timestamp,
}

/// Runtime statistics of a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeStat {
    pub version: String,
    pub log_dir: String,
    pub ring_cur: String,
    pub ring_prev: String,
    pub vm_version: String,
    pub total_mem_usage: u64,
    pub system_mem_usage: u64,
    pub procs_mem_usage: u64,
    pub ets_mem_usage: u64,
    pub num_of_procs: u64,
    pub limit_of_procs: u64,
    pub thread_pool_size: u64,
    pub kernel_poll: bool,
}
