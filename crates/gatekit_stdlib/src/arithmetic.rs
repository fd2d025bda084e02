//! Selection and addition.

use crate::basic::{and, not, or, xor};
use crate::pair;
use gatekit_common::GateResult;
use gatekit_ir::{Context, GateHandle, Parent, Point, Type};
use gatekit_layout::{ltr_flow, ltr_gate, ttb_flow};

/// `{select, a, b} -> Bit`: `a` while `select` is low, `b` while it is high.
pub fn multiplexer(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let input = Type::dict([("select", Type::Bit), ("a", Type::Bit), ("b", Type::Bit)]);
    let circuit = ctx.new_circuit(parent, "multiplexer", &input, &Type::Bit)?;
    let select = circuit.inputs.field("select")?.clone();

    let select_not = not(ctx, circuit.scope())?;
    ctx.connect(&select, &select_not.inputs)?;

    let a_and = and(ctx, circuit.scope())?;
    ctx.connect(circuit.inputs.field("a")?, a_and.inputs.item(0)?)?;
    ctx.connect(&select_not.outputs, a_and.inputs.item(1)?)?;

    let b_and = and(ctx, circuit.scope())?;
    ctx.connect(circuit.inputs.field("b")?, b_and.inputs.item(0)?)?;
    ctx.connect(&select, b_and.inputs.item(1)?)?;

    let either = or(ctx, circuit.scope())?;
    ctx.connect(&a_and.outputs, either.inputs.item(0)?)?;
    ctx.connect(&b_and.outputs, either.inputs.item(1)?)?;
    ctx.connect(&either.outputs, &circuit.outputs)?;

    ltr_flow(vec![
        ttb_flow(vec![
            ltr_gate(&a_and),
            ltr_flow(vec![ltr_gate(&select_not), ltr_gate(&b_and)]),
        ]),
        ltr_gate(&either),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// `{a, b, carry} -> {carry, result}`: a full adder.
pub fn adder1(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let input = Type::dict([("a", Type::Bit), ("b", Type::Bit), ("carry", Type::Bit)]);
    let output = Type::dict([("carry", Type::Bit), ("result", Type::Bit)]);
    let circuit = ctx.new_circuit(parent, "adder1", &input, &output)?;
    let s = circuit.scope();

    let a_b_xor = xor(ctx, s)?;
    let a_b_and = and(ctx, s)?;
    let ab_carry_xor = xor(ctx, s)?;
    let ab_carry_and = and(ctx, s)?;
    let carry_or = or(ctx, s)?;

    let a_b = pair(circuit.inputs.field("a")?, circuit.inputs.field("b")?);
    ctx.connect(&a_b, &a_b_xor.inputs)?;
    ctx.connect(&a_b, &a_b_and.inputs)?;

    let ab_carry = pair(&a_b_xor.outputs, circuit.inputs.field("carry")?);
    ctx.connect(&ab_carry, &ab_carry_xor.inputs)?;
    ctx.connect(&ab_carry, &ab_carry_and.inputs)?;

    ctx.connect(&ab_carry_xor.outputs, circuit.outputs.field("result")?)?;
    ctx.connect(&pair(&ab_carry_and.outputs, &a_b_and.outputs), &carry_or.inputs)?;
    ctx.connect(&carry_or.outputs, circuit.outputs.field("carry")?)?;

    ltr_flow(vec![
        ttb_flow(vec![ltr_gate(&a_b_xor), ltr_gate(&a_b_and)]),
        ttb_flow(vec![ltr_gate(&ab_carry_xor), ltr_gate(&ab_carry_and)]),
        ltr_gate(&carry_or),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(circuit)
}

/// A ripple-carry adder over `width`-bit operands, named `adder{width}`.
///
/// `{a: [Bit; width], b: [Bit; width], carry} -> {result: [Bit; width], carry}`.
/// Bit 0 of each list receives the incoming carry. A zero-width adder passes
/// the carry straight through.
pub fn adder(width: usize) -> impl Fn(&mut Context, Parent) -> GateResult<GateHandle> {
    move |ctx, parent| {
        let input = Type::dict([
            ("a", Type::bits(width)),
            ("b", Type::bits(width)),
            ("carry", Type::Bit),
        ]);
        let output = Type::dict([("result", Type::bits(width)), ("carry", Type::Bit)]);
        let circuit = ctx.new_circuit(parent, &format!("adder{width}"), &input, &output)?;
        let (a, b, result) = (
            circuit.inputs.field("a")?,
            circuit.inputs.field("b")?,
            circuit.outputs.field("result")?,
        );

        let mut adders = Vec::with_capacity(width);
        for i in 0..width {
            let bit = adder1(ctx, circuit.scope())?;
            ctx.connect(a.item(i)?, bit.inputs.field("a")?)?;
            ctx.connect(b.item(i)?, bit.inputs.field("b")?)?;
            ctx.connect(bit.outputs.field("result")?, result.item(i)?)?;
            adders.push(bit);
        }

        let mut carry = circuit.inputs.field("carry")?;
        for bit in &adders {
            ctx.connect(carry, bit.inputs.field("carry")?)?;
            carry = bit.outputs.field("carry")?;
        }
        ctx.connect(carry, circuit.outputs.field("carry")?)?;

        ltr_flow(adders.iter().map(ltr_gate).collect()).apply(ctx, Point::ORIGIN)?;
        Ok(circuit)
    }
}
