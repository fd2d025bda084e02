//! Circuit graph IR for gatekit.
//!
//! Wire shapes ([`Type`]), wire groups ([`Bundle`]), gates ([`Gate`]) and the
//! build session that records them ([`Context`]). Circuits are described by
//! calling builder functions against a `Context`; the layout and netlist
//! crates consume the finished graph.

#![warn(missing_docs)]

pub mod arena;
pub mod bundle;
pub mod context;
pub mod fields;
pub mod gate;
pub mod geometry;
pub mod ids;
pub mod types;

pub use bundle::Bundle;
pub use context::{Connection, Context};
pub use fields::Fields;
pub use gate::{Circuit, Gate, GateHandle, GateKind, GateLayout, Parent, Primitive};
pub use geometry::{Direction, Point};
pub use ids::{BitId, GateId};
pub use types::Type;
