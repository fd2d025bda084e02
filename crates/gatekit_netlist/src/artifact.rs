//! The exported netlist document.
//!
//! Serializes to the JSON consumed by the simulator:
//!
//! ```text
//! {
//!   "connections": [[0, 3], ...],
//!   "toplevel_gates": [{"type": "nand", "inputs": [..], "outputs": [..]}, ...]
//! }
//! ```
//!
//! `name` and `layout` are only present when layout export is enabled.

use crate::nodes::NodeId;
use gatekit_ir::{GateLayout, Primitive};
use serde::{Deserialize, Serialize};

/// A flattened design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Netlist {
    /// Elementary `[from, to]` node pairs, in connection order.
    pub connections: Vec<[NodeId; 2]>,
    /// The children of the main circuit.
    pub toplevel_gates: Vec<GateNode>,
}

/// The `type` tag of a serialized gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// `nand`
    Nand,
    /// `false`
    False,
    /// `true`
    True,
    /// `unerror`
    Unerror,
    /// `button`
    Button,
    /// `tristate`
    Tristate,
    /// `subcircuit`
    Subcircuit,
}

impl From<Primitive> for NodeKind {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Nand => NodeKind::Nand,
            Primitive::False => NodeKind::False,
            Primitive::True => NodeKind::True,
            Primitive::Unerror => NodeKind::Unerror,
            Primitive::Button => NodeKind::Button,
            Primitive::Tristate => NodeKind::Tristate,
        }
    }
}

/// One serialized gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateNode {
    /// Gate kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Circuit name, for subcircuits when layout export is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Input nodes, in canonical bundle order.
    pub inputs: Vec<NodeId>,
    /// Output nodes, in canonical bundle order.
    pub outputs: Vec<NodeId>,
    /// Children; present exactly for subcircuits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gates: Option<Vec<GateNode>>,
    /// Position and facing, when layout export is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<GateLayout>,
}

impl GateNode {
    /// Children of a subcircuit; empty for primitives.
    pub fn children(&self) -> &[GateNode] {
        self.gates.as_deref().unwrap_or(&[])
    }
}

impl Netlist {
    /// Every gate, depth-first in serialization order.
    pub fn all_gates(&self) -> Vec<&GateNode> {
        fn walk<'a>(gates: &'a [GateNode], out: &mut Vec<&'a GateNode>) {
            for gate in gates {
                out.push(gate);
                walk(gate.children(), out);
            }
        }
        let mut out = Vec::new();
        walk(&self.toplevel_gates, &mut out);
        out
    }

    /// The number of primitive (non-subcircuit) gates at any depth.
    pub fn primitive_count(&self) -> usize {
        self.all_gates()
            .iter()
            .filter(|g| g.kind != NodeKind::Subcircuit)
            .count()
    }

    /// The number of distinct nodes referenced anywhere in the document.
    pub fn node_count(&self) -> usize {
        let mut nodes: Vec<NodeId> = self.connections.iter().flatten().copied().collect();
        for gate in self.all_gates() {
            nodes.extend(gate.inputs.iter().chain(&gate.outputs));
        }
        nodes.sort();
        nodes.dedup();
        nodes.len()
    }
}
