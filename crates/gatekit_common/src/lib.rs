//! Shared foundational types used across the gatekit workspace.
//!
//! This crate provides the error taxonomy shared by circuit construction,
//! layout, and netlist flattening, plus the interner used for circuit names.

#![warn(missing_docs)]

pub mod error;
pub mod ident;

pub use error::{GateError, GateResult};
pub use ident::{Ident, Interner};
