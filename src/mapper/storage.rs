//! Placement, usage and compaction reply mapping

use serde_json::Value;

use crate::error::Result;
use crate::models::{AssignedFile, CompactionStatus, StorageStat};
use super::{Fields, FromPayload};

impl FromPayload for AssignedFile {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("assigned_file", payload)?;

        Ok(AssignedFile {
            node: fields.string("node")?,
            vnode_id: fields.string("vnode_id")?,
            size: fields.u64("size")?,
            clock: fields.string("clock")?,
            checksum: fields.string("checksum")?,
            timestamp: fields.timestamp_or_absent("timestamp")?,
            delete: fields.nonzero_code("delete")?,
            num_of_chunks: fields.u64("num_of_chunks")?,
        })
    }
}

impl FromPayload for StorageStat {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("storage_stat", payload)?;

        Ok(StorageStat {
            active_num_of_objects: fields.u64("active_num_of_objects")?,
            total_num_of_objects: fields.u64("total_num_of_objects")?,
            active_size_of_objects: fields.u64("active_size_of_objects")?,
            total_size_of_objects: fields.u64("total_size_of_objects")?,
            ratio_of_active_size: fields.opt_f64("ratio_of_active_size")?,
            last_compaction_start: fields.string("last_compaction_start")?,
            last_compaction_end: fields.string("last_compaction_end")?,
        })
    }
}

impl FromPayload for CompactionStatus {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("compaction_status", payload)?;

        Ok(CompactionStatus {
            status: fields.string("status")?,
            last_compaction_start: fields.string("last_compaction_start")?,
            total_targets: fields.u64("total_targets")?,
            num_of_pending_targets: fields.u64("num_of_pending_targets")?,
            num_of_ongoing_targets: fields.u64("num_of_ongoing_targets")?,
            num_of_out_of_targets: fields.u64("num_of_out_of_targets")?,
        })
    }
}
