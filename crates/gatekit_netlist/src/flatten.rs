//! Flattening a finished [`Context`] into a [`Netlist`].
//!
//! Connections are numbered first, so the node ids in `connections` come out
//! in connection order. Wires that only appear on gate ports are numbered
//! afterwards while the gate tree is serialized.

use crate::artifact::{GateNode, Netlist, NodeKind};
use crate::nodes::{NodeId, NodeTable};
use gatekit_common::{GateError, GateResult};
use gatekit_ir::{Bundle, Context, GateId, GateKind};

/// Options for [`flatten`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Attach each gate's layout, and each subcircuit's name, to its node.
    pub include_layout: bool,
}

/// Flattens the bundle into node ids.
///
/// Lists keep their declared order, dicts are emitted in field-name order.
pub fn flatten_bundle(bundle: &Bundle, nodes: &mut NodeTable) -> Vec<NodeId> {
    let mut out = Vec::with_capacity(bundle.size());
    collect(bundle, nodes, &mut out);
    out
}

fn collect(bundle: &Bundle, nodes: &mut NodeTable, out: &mut Vec<NodeId>) {
    match bundle {
        Bundle::Bit(bit) => out.push(nodes.node_for_bit(*bit)),
        Bundle::List(items) => {
            for item in items {
                collect(item, nodes, out);
            }
        }
        Bundle::Dict(fields) => {
            for (_, field) in fields.sorted() {
                collect(field, nodes, out);
            }
        }
    }
}

/// Flattens the design rooted at the context's main circuit.
pub fn flatten(ctx: &Context, options: &FlattenOptions) -> GateResult<Netlist> {
    let root = ctx.main_circuit().ok_or(GateError::MissingMainCircuit)?;
    let mut flattener = Flattener {
        ctx,
        options,
        nodes: NodeTable::new(),
    };

    let mut connections = Vec::new();
    for connection in ctx.connections() {
        let from = flatten_bundle(&connection.from, &mut flattener.nodes);
        let to = flatten_bundle(&connection.to, &mut flattener.nodes);
        if from.len() != to.len() {
            return Err(GateError::internal(format!(
                "connection endpoints flatten to {} and {} wires",
                from.len(),
                to.len()
            )));
        }
        connections.extend(from.into_iter().zip(to).map(|(a, b)| [a, b]));
    }

    let toplevel = ctx
        .gate(root)
        .map_err(|_| GateError::malformed(format!("main circuit {root} is missing")))?
        .children();
    let toplevel_gates = flattener.gates(toplevel)?;

    Ok(Netlist {
        connections,
        toplevel_gates,
    })
}

struct Flattener<'a> {
    ctx: &'a Context,
    options: &'a FlattenOptions,
    nodes: NodeTable,
}

impl Flattener<'_> {
    fn gates(&mut self, ids: &[GateId]) -> GateResult<Vec<GateNode>> {
        ids.iter().map(|&id| self.gate(id)).collect()
    }

    fn gate(&mut self, id: GateId) -> GateResult<GateNode> {
        let ctx = self.ctx;
        let gate = ctx
            .gate(id)
            .map_err(|_| GateError::malformed(format!("gate {id} is not part of this design")))?;

        let (kind, name) = match gate.kind() {
            GateKind::Primitive(primitive) => {
                let (inputs, outputs) = (gate.inputs().ty(), gate.outputs().ty());
                if inputs != primitive.input_type() || outputs != primitive.output_type() {
                    return Err(GateError::malformed(format!(
                        "{} gate {id} has signature {inputs} -> {outputs}, expected {} -> {}",
                        primitive.name(),
                        primitive.input_type(),
                        primitive.output_type()
                    )));
                }
                (NodeKind::from(*primitive), None)
            }
            GateKind::Circuit(_) if self.options.include_layout => (
                NodeKind::Subcircuit,
                ctx.circuit_name(id).map(str::to_string),
            ),
            GateKind::Circuit(_) => (NodeKind::Subcircuit, None),
        };

        let inputs = flatten_bundle(gate.inputs(), &mut self.nodes);
        let outputs = flatten_bundle(gate.outputs(), &mut self.nodes);
        let gates = match kind {
            NodeKind::Subcircuit => Some(self.gates(gate.children())?),
            _ => None,
        };

        Ok(GateNode {
            kind,
            name,
            inputs,
            outputs,
            gates,
            layout: self.options.include_layout.then(|| gate.layout()),
        })
    }
}
