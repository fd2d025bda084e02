//! Single-bit logic gates.

use crate::{pair, two_bits};
use gatekit_common::GateResult;
use gatekit_ir::{Context, GateHandle, Parent, Point, Type};
use gatekit_layout::{ltr_flow, ltr_gate, ttb_flow};

/// `Bit -> Bit`: a NAND with both inputs tied together.
pub fn not(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let circuit = ctx.new_circuit(parent, "not", &Type::Bit, &Type::Bit)?;
    let nand = ctx.nand(circuit.scope())?;

    ctx.connect(&pair(&circuit.inputs, &circuit.inputs), &nand.inputs)?;
    ctx.connect(&nand.outputs, &circuit.outputs)?;
    Ok(circuit)
}

/// `[Bit, Bit] -> Bit`.
pub fn and(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let circuit = ctx.new_circuit(parent, "and", &two_bits(), &Type::Bit)?;
    let nand = ctx.nand(circuit.scope())?;
    let not = not(ctx, circuit.scope())?;

    ctx.connect(&circuit.inputs, &nand.inputs)?;
    ctx.connect(&nand.outputs, &not.inputs)?;
    ctx.connect(&not.outputs, &circuit.outputs)?;

    ltr_flow(vec![ltr_gate(&nand), ltr_gate(&not)]).apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// `[Bit, Bit] -> Bit`, as a NAND of both inputs inverted.
pub fn or(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let circuit = ctx.new_circuit(parent, "or", &two_bits(), &Type::Bit)?;
    let nand = ctx.nand(circuit.scope())?;
    let not0 = not(ctx, circuit.scope())?;
    let not1 = not(ctx, circuit.scope())?;

    ctx.connect(circuit.inputs.item(0)?, &not0.inputs)?;
    ctx.connect(circuit.inputs.item(1)?, &not1.inputs)?;
    ctx.connect(&pair(&not0.outputs, &not1.outputs), &nand.inputs)?;
    ctx.connect(&nand.outputs, &circuit.outputs)?;

    ltr_flow(vec![
        ttb_flow(vec![ltr_gate(&not0), ltr_gate(&not1)]),
        ltr_gate(&nand),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// `[Bit, Bit] -> Bit`.
pub fn nor(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let circuit = ctx.new_circuit(parent, "nor", &two_bits(), &Type::Bit)?;
    let or = or(ctx, circuit.scope())?;
    let not = not(ctx, circuit.scope())?;

    ctx.connect(&circuit.inputs, &or.inputs)?;
    ctx.connect(&or.outputs, &not.inputs)?;
    ctx.connect(&not.outputs, &circuit.outputs)?;

    ltr_flow(vec![ltr_gate(&or), ltr_gate(&not)]).apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// `[Bit, Bit] -> Bit`, the four-NAND construction.
pub fn xor(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let circuit = ctx.new_circuit(parent, "xor", &two_bits(), &Type::Bit)?;
    let (a, b) = (circuit.inputs.item(0)?.clone(), circuit.inputs.item(1)?.clone());

    let first = ctx.nand(circuit.scope())?;
    ctx.connect(&circuit.inputs, &first.inputs)?;

    let nand0 = ctx.nand(circuit.scope())?;
    let nand1 = ctx.nand(circuit.scope())?;
    ctx.connect(&pair(&a, &first.outputs), &nand0.inputs)?;
    ctx.connect(&pair(&b, &first.outputs), &nand1.inputs)?;

    let last = ctx.nand(circuit.scope())?;
    ctx.connect(&pair(&nand0.outputs, &nand1.outputs), &last.inputs)?;
    ctx.connect(&last.outputs, &circuit.outputs)?;

    ltr_flow(vec![
        ltr_gate(&first),
        ttb_flow(vec![ltr_gate(&nand0), ltr_gate(&nand1)]),
        ltr_gate(&last),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}
