//! Status reply mapping

use serde_json::Value;

use crate::error::{ManagerError, Result};
use crate::models::{Node, NodeStat, NodeType, Status, SystemInfo};
use super::{Fields, FromPayload};

impl FromPayload for Status {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("status", payload)?;

        let node_stat = if fields.has("node_stat") {
            Some(NodeStat::from_payload(fields.value("node_stat")?)?)
        } else {
            None
        };

        let system_info = if fields.has("system_info") {
            Some(SystemInfo::from_payload(fields.value("system_info")?)?)
        } else {
            None
        };

        let node_list = if fields.has("node_list") {
            let nodes = fields
                .list("node_list")?
                .iter()
                .map(Node::from_payload)
                .collect::<Result<Vec<_>>>()?;
            Some(nodes)
        } else {
            None
        };

        Ok(Status {
            node_stat,
            system_info,
            node_list,
        })
    }
}

impl FromPayload for SystemInfo {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("system_info", payload)?;

        Ok(SystemInfo {
            version: fields.string("version")?,
            ring_size: fields.u32("ring_size")?,
            // Older managers report the ring hashes as ring_hash_cur/prev
            ring_cur: fields.string_or("ring_cur", "ring_hash_cur")?,
            ring_prev: fields.string_or("ring_prev", "ring_hash_prev")?,
            n: fields.positive_u32("n")?,
            r: fields.positive_u32("r")?,
            w: fields.positive_u32("w")?,
            d: fields.positive_u32("d")?,
        })
    }
}

impl FromPayload for Node {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("node", payload)?;

        let code = fields.string("type")?;
        let node_type = NodeType::from_code(&code).ok_or_else(|| {
            ManagerError::Format(format!("node.type: unknown node type `{}`", code))
        })?;

        Ok(Node {
            node_type,
            node: fields.string("node")?,
            state: fields.string("state")?,
            ring_cur: fields.string("ring_cur")?,
            ring_prev: fields.string("ring_prev")?,
            joined_at: fields.timestamp("when")?,
        })
    }
}

impl FromPayload for NodeStat {
    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = Fields::of("node_stat", payload)?;

        Ok(NodeStat {
            version: fields.string("version")?,
            log_dir: fields.string("log_dir")?,
            ring_cur: fields.string("ring_cur")?,
            ring_prev: fields.string("ring_prev")?,
            vm_version: fields.string("vm_version")?,
            total_mem_usage: fields.u64("total_mem_usage")?,
            system_mem_usage: fields.u64("system_mem_usage")?,
            procs_mem_usage: fields.u64("procs_mem_usage")?,
            ets_mem_usage: fields.u64("ets_mem_usage")?,
            num_of_procs: fields.u64("num_of_procs")?,
            limit_of_procs: fields.u64("limit_of_procs")?,
            thread_pool_size: fields.u64("thread_pool_size")?,
            kernel_poll: fields.literal_true("kernel_poll"),
        })
    }
}
