//! Object placement and storage usage models

use serde::Serialize;

use super::Timestamp;

/// Where one replica of an object lives (`whereis`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedFile {
    pub node: String,
    pub vnode_id: String,
    pub size: u64,
    pub clock: String,
    pub checksum: String,
    /// `None` when the node holds no copy yet
    pub timestamp: Option<Timestamp>,
    pub delete: bool,
    pub num_of_chunks: u64,
}

/// Storage usage of a node (`du`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageStat {
    pub active_num_of_objects: u64,
    pub total_num_of_objects: u64,
    pub active_size_of_objects: u64,
    pub total_size_of_objects: u64,
    pub ratio_of_active_size: Option<f64>,
    pub last_compaction_start: String,
    pub last_compaction_end: String,
}

/// Compaction progress of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactionStatus {
    pub status: String,
    pub last_compaction_start: String,
    pub total_targets: u64,
    pub num_of_pending_targets: u64,
    pub num_of_ongoing_targets: u64,
    pub num_of_out_of_targets: u64,
}
