//! Clock generation.

use crate::basic::{and, not, or};
use crate::pair;
use gatekit_common::GateResult;
use gatekit_ir::{Context, Direction, GateHandle, Parent, Point, Type};
use gatekit_layout::{ltr_flow, ltr_gate, snake_gates};
use std::iter;

/// A ring-oscillator clock of `length` inverters, named `clock`.
///
/// `{enable, manual} -> Bit`. The ring runs through an unerror gate so it
/// starts from a defined value. Its tap is gated by `enable` and or-ed with
/// `manual`. The ring is folded into rows of `floor(sqrt(length))` gates.
pub fn clock(length: usize) -> impl Fn(&mut Context, Parent) -> GateResult<GateHandle> {
    move |ctx, parent| {
        let input = Type::dict([("enable", Type::Bit), ("manual", Type::Bit)]);
        let circuit = ctx.new_circuit(parent, "clock", &input, &Type::Bit)?;
        let s = circuit.scope();

        let start = ctx.unerror(s)?;
        let mut ring = Vec::with_capacity(length);
        for _ in 0..length {
            ring.push(not(ctx, s)?);
        }
        ctx.connect_chain(iter::once(&start).chain(&ring).chain(iter::once(&start)))?;

        let tap = ring.last().unwrap_or(&start);
        let enable_and = and(ctx, s)?;
        ctx.connect(
            &pair(&tap.outputs, circuit.inputs.field("enable")?),
            &enable_and.inputs,
        )?;

        let manual_or = or(ctx, s)?;
        ctx.connect(
            &pair(&enable_and.outputs, circuit.inputs.field("manual")?),
            &manual_or.inputs,
        )?;
        ctx.connect(&manual_or.outputs, &circuit.outputs)?;

        let row_len = ((length as f64).sqrt().floor() as usize).max(1);
        ltr_flow(vec![
            snake_gates(
                Direction::Ltr,
                Direction::Ttb,
                row_len,
                iter::once(&start).chain(&ring),
            )?,
            ltr_gate(&enable_and),
            ltr_gate(&manual_or),
        ])
        .apply(ctx, Point::ORIGIN)?;
        Ok(circuit)
    }
}
