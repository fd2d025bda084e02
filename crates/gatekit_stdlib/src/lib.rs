//! Reusable circuits built from NAND gates, plus the registry of top-level
//! designs the CLI can export.
//!
//! Every builder has the shape `fn(&mut Context, Parent) -> GateResult<GateHandle>`:
//! it creates one named subcircuit under `parent`, fills it, lays it out, and
//! returns the handle. Width-parameterized families (`adder`, `register`,
//! `tristate`, `clock`) are functions that return such a builder.

#![warn(missing_docs)]

mod arithmetic;
mod basic;
mod designs;
mod memory;
mod timing;
mod tristate;

pub use arithmetic::{adder, adder1, multiplexer};
pub use basic::{and, nor, not, or, xor};
pub use designs::{find_design, DesignEntry, DESIGNS};
pub use memory::{d_flip_flop, d_latch, register, register1, sr_latch};
pub use timing::clock;
pub use tristate::tristate;

use gatekit_common::GateResult;
use gatekit_ir::{Bundle, Context, GateHandle, Parent, Type};

/// A builder that creates one circuit under the given parent.
pub type Builder = fn(&mut Context, Parent) -> GateResult<GateHandle>;

/// Groups two bundles into a `[a, b]` pair without creating wires.
pub(crate) fn pair(a: &Bundle, b: &Bundle) -> Bundle {
    Bundle::list([a.clone(), b.clone()])
}

/// `[Bit, Bit]`.
pub(crate) fn two_bits() -> Type {
    Type::bits(2)
}
