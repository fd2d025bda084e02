//! Netlist export for gatekit designs.
//!
//! [`flatten`] turns a finished [`Context`](gatekit_ir::Context) into a
//! [`Netlist`]: every wire becomes a numbered node, every connection becomes
//! a list of `[from, to]` node pairs, and the gate tree is kept as nested
//! subcircuits. [`export`] wraps the whole build-flatten-write sequence.

#![warn(missing_docs)]

mod artifact;
mod export;
mod flatten;
mod nodes;

pub use artifact::{GateNode, Netlist, NodeKind};
pub use export::{elaborate, export, render, ExportError, ExportOptions, ExportSummary};
pub use flatten::{flatten, flatten_bundle, FlattenOptions};
pub use nodes::{NodeId, NodeTable};
