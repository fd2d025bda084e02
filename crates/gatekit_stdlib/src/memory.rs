//! Latches, flip-flops and registers.
//!
//! Every storage loop here passes through an unerror gate, so the stored
//! value starts out as a defined 0 instead of an undefined one.

use crate::arithmetic::multiplexer;
use crate::basic::{and, not, or};
use gatekit_common::GateResult;
use gatekit_ir::{Context, GateHandle, Parent, Point, Type};
use gatekit_layout::{ltr_flow, ltr_gate, ttb_flow};

/// `{set, reset} -> Bit`: an SR latch built from OR-AND feedback.
pub fn sr_latch(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let input = Type::dict([("set", Type::Bit), ("reset", Type::Bit)]);
    let circuit = ctx.new_circuit(parent, "sr", &input, &Type::Bit)?;
    let s = circuit.scope();

    let reset_not = not(ctx, s)?;
    let hold = ctx.unerror(s)?;
    let set_or = or(ctx, s)?;
    let keep_and = and(ctx, s)?;

    ctx.connect(circuit.inputs.field("set")?, set_or.inputs.item(1)?)?;
    ctx.connect(&set_or.outputs, keep_and.inputs.item(0)?)?;
    ctx.connect(&keep_and.outputs, &hold.inputs)?;
    ctx.connect(&hold.outputs, set_or.inputs.item(0)?)?;
    ctx.connect(circuit.inputs.field("reset")?, &reset_not.inputs)?;
    ctx.connect(&reset_not.outputs, keep_and.inputs.item(1)?)?;
    ctx.connect(&keep_and.outputs, &circuit.outputs)?;

    ltr_flow(vec![
        ttb_flow(vec![
            ltr_gate(&reset_not),
            ltr_flow(vec![ltr_gate(&hold), ltr_gate(&set_or)]),
        ]),
        ltr_gate(&keep_and),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// `{data, store} -> Bit`: follows `data` while `store` is high.
pub fn d_latch(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let input = Type::dict([("data", Type::Bit), ("store", Type::Bit)]);
    let circuit = ctx.new_circuit(parent, "d latch", &input, &Type::Bit)?;
    let s = circuit.scope();
    let (data, store) = (circuit.inputs.field("data")?, circuit.inputs.field("store")?);

    let sr = sr_latch(ctx, s)?;
    let set_and = and(ctx, s)?;
    let reset_and = and(ctx, s)?;
    let data_not = not(ctx, s)?;

    ctx.connect(store, set_and.inputs.item(0)?)?;
    ctx.connect(data, set_and.inputs.item(1)?)?;

    ctx.connect(data, &data_not.inputs)?;
    ctx.connect(store, reset_and.inputs.item(0)?)?;
    ctx.connect(&data_not.outputs, reset_and.inputs.item(1)?)?;

    ctx.connect(&set_and.outputs, sr.inputs.field("set")?)?;
    ctx.connect(&reset_and.outputs, sr.inputs.field("reset")?)?;
    ctx.connect(&sr.outputs, &circuit.outputs)?;

    ltr_flow(vec![
        ttb_flow(vec![
            ltr_gate(&set_and),
            ltr_flow(vec![ltr_gate(&data_not), ltr_gate(&reset_and)]),
        ]),
        ltr_gate(&sr),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// `{data, clock} -> Bit`: a leader-follower pair of D latches that samples
/// `data` on the rising edge of `clock`.
pub fn d_flip_flop(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let input = Type::dict([("data", Type::Bit), ("clock", Type::Bit)]);
    let circuit = ctx.new_circuit(parent, "d flip flop", &input, &Type::Bit)?;
    let s = circuit.scope();
    let clock = circuit.inputs.field("clock")?;

    let clock_not = not(ctx, s)?;
    ctx.connect(clock, &clock_not.inputs)?;

    let leader = d_latch(ctx, s)?;
    ctx.connect(&clock_not.outputs, leader.inputs.field("store")?)?;
    ctx.connect(circuit.inputs.field("data")?, leader.inputs.field("data")?)?;

    let follower = d_latch(ctx, s)?;
    ctx.connect(clock, follower.inputs.field("store")?)?;
    ctx.connect(&leader.outputs, follower.inputs.field("data")?)?;

    ctx.connect(&follower.outputs, &circuit.outputs)?;

    ltr_flow(vec![
        ltr_gate(&clock_not),
        ltr_gate(&leader),
        ltr_gate(&follower),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// `{data, store, clock} -> Bit`: loads `data` on a clock edge while `store`
/// is high, otherwise keeps its value.
///
/// The exposed output goes through a final unerror gate and reads 0 before
/// the first store.
pub fn register1(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let input = Type::dict([("data", Type::Bit), ("store", Type::Bit), ("clock", Type::Bit)]);
    let circuit = ctx.new_circuit(parent, "1 bit register", &input, &Type::Bit)?;
    let s = circuit.scope();

    let select = multiplexer(ctx, s)?;
    let flip_flop = d_flip_flop(ctx, s)?;

    let current = ctx.unerror(s)?;
    ctx.connect(&flip_flop.outputs, &current.inputs)?;

    // store selects the new data, otherwise the current value loops back
    ctx.connect(circuit.inputs.field("store")?, select.inputs.field("select")?)?;
    ctx.connect(&current.outputs, select.inputs.field("a")?)?;
    ctx.connect(circuit.inputs.field("data")?, select.inputs.field("b")?)?;

    ctx.connect(&select.outputs, flip_flop.inputs.field("data")?)?;
    ctx.connect(circuit.inputs.field("clock")?, flip_flop.inputs.field("clock")?)?;

    let output = ctx.unerror(s)?;
    ctx.connect(&flip_flop.outputs, &output.inputs)?;
    ctx.connect(&output.outputs, &circuit.outputs)?;

    ltr_flow(vec![
        ltr_gate(&current),
        ltr_gate(&select),
        ltr_gate(&flip_flop),
        ltr_gate(&output),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// A `width`-bit register, named `{width} bit register`.
///
/// `{data: [Bit; width], store, clock} -> [Bit; width]`. All bits share
/// `store` and `clock`.
pub fn register(width: usize) -> impl Fn(&mut Context, Parent) -> GateResult<GateHandle> {
    move |ctx, parent| {
        let input = Type::dict([
            ("data", Type::bits(width)),
            ("store", Type::Bit),
            ("clock", Type::Bit),
        ]);
        let circuit =
            ctx.new_circuit(parent, &format!("{width} bit register"), &input, &Type::bits(width))?;
        let data = circuit.inputs.field("data")?;

        let mut bits = Vec::with_capacity(width);
        for i in 0..width {
            let bit = register1(ctx, circuit.scope())?;
            ctx.connect(data.item(i)?, bit.inputs.field("data")?)?;
            ctx.connect(circuit.inputs.field("clock")?, bit.inputs.field("clock")?)?;
            ctx.connect(circuit.inputs.field("store")?, bit.inputs.field("store")?)?;
            ctx.connect(&bit.outputs, circuit.outputs.item(i)?)?;
            bits.push(bit);
        }

        ttb_flow(bits.iter().map(ltr_gate).collect()).apply(ctx, Point::ORIGIN)?;
        Ok(circuit)
    }
}
