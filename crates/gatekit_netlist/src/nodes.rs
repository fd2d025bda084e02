//! Node numbering for one flatten pass.

use gatekit_ir::BitId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The number of one elementary wire in an exported netlist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a node id from a raw `u32`.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32`.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Assigns sequential node ids to wire identities in first-seen order.
///
/// A table lives for exactly one flatten pass, so two exports of the same
/// design number their nodes independently.
#[derive(Debug, Default)]
pub struct NodeTable {
    nodes: HashMap<BitId, NodeId>,
}

impl NodeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `bit`, numbering it if this is its first appearance.
    pub fn node_for_bit(&mut self, bit: BitId) -> NodeId {
        let next = NodeId(self.nodes.len() as u32);
        *self.nodes.entry(bit).or_insert(next)
    }

    /// The number of nodes assigned so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been assigned.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
