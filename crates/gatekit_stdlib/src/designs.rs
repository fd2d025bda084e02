//! Named top-level designs.
//!
//! Each entry builds a complete main circuit (no inputs, no outputs) that can
//! be passed straight to `Context::set_main_circuit`.

use crate::arithmetic::adder;
use crate::basic::and;
use crate::memory::register;
use crate::timing::clock;
use crate::Builder;
use gatekit_common::GateResult;
use gatekit_ir::{Bundle, Context, GateHandle, Parent, Point, Type};
use gatekit_layout::{ltr_flow, ltr_gate, ttb_flow};

/// A design the CLI can export by name.
#[derive(Debug, Clone, Copy)]
pub struct DesignEntry {
    /// Name used on the command line and in `gatekit.toml`.
    pub name: &'static str,
    /// One-line description for `gatekit list`.
    pub description: &'static str,
    /// Builds the main circuit.
    pub build: Builder,
}

/// Every registered design, in listing order.
pub const DESIGNS: &[DesignEntry] = &[
    DesignEntry {
        name: "and",
        description: "two buttons driving an and gate",
        build: and_demo,
    },
    DesignEntry {
        name: "adder",
        description: "a 51-inverter clock and a 5-bit adder, all inputs on buttons",
        build: clock_and_adder,
    },
    DesignEntry {
        name: "register",
        description: "an 8-bit register with data, store and clock buttons",
        build: register_demo,
    },
];

/// Looks up a design by name.
pub fn find_design(name: &str) -> Option<&'static DesignEntry> {
    DESIGNS.iter().find(|d| d.name == name)
}

fn main_circuit(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    ctx.new_circuit(parent, "main", &Type::unit(), &Type::unit())
}

fn buttons(ctx: &mut Context, parent: Parent, count: usize) -> GateResult<Vec<GateHandle>> {
    (0..count).map(|_| ctx.button(parent)).collect()
}

fn outputs(gates: &[GateHandle]) -> Bundle {
    Bundle::list(gates.iter().map(|g| g.outputs.clone()))
}

fn and_demo(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    let main = main_circuit(ctx, parent)?;
    let inputs = buttons(ctx, main.scope(), 2)?;
    let gate = and(ctx, main.scope())?;
    ctx.connect(&outputs(&inputs), &gate.inputs)?;

    ltr_flow(vec![
        ttb_flow(inputs.iter().map(ltr_gate).collect()),
        ltr_gate(&gate),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(main)
}

fn clock_and_adder(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    const CLOCK_LENGTH: usize = 51;
    const ADDER_WIDTH: usize = 5;

    let main = main_circuit(ctx, parent)?;
    let s = main.scope();

    let enable = ctx.button(s)?;
    let manual = ctx.button(s)?;
    let clock = clock(CLOCK_LENGTH)(ctx, s)?;
    ctx.connect(
        &Bundle::dict([
            ("enable", enable.outputs.clone()),
            ("manual", manual.outputs.clone()),
        ]),
        &clock.inputs,
    )?;

    let operands = buttons(ctx, s, 2 * ADDER_WIDTH + 1)?;
    let adder = adder(ADDER_WIDTH)(ctx, s)?;
    ctx.connect(
        &Bundle::dict([
            ("a", outputs(&operands[..ADDER_WIDTH])),
            ("b", outputs(&operands[ADDER_WIDTH..2 * ADDER_WIDTH])),
            ("carry", operands[2 * ADDER_WIDTH].outputs.clone()),
        ]),
        &adder.inputs,
    )?;

    ltr_flow(vec![
        ttb_flow(vec![ltr_gate(&enable), ltr_gate(&manual)]),
        ltr_gate(&clock),
        ttb_flow(operands.iter().map(ltr_gate).collect()),
        ltr_gate(&adder),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(main)
}

fn register_demo(ctx: &mut Context, parent: Parent) -> GateResult<GateHandle> {
    const WIDTH: usize = 8;

    let main = main_circuit(ctx, parent)?;
    let s = main.scope();

    let data = buttons(ctx, s, WIDTH)?;
    let store = ctx.button(s)?;
    let clock = ctx.button(s)?;
    let register = register(WIDTH)(ctx, s)?;

    ctx.connect(&outputs(&data), register.inputs.field("data")?)?;
    ctx.connect(&clock.outputs, register.inputs.field("clock")?)?;
    ctx.connect(&store.outputs, register.inputs.field("store")?)?;

    ltr_flow(vec![
        ttb_flow(data.iter().map(ltr_gate).collect()),
        ttb_flow(vec![ltr_gate(&store), ltr_gate(&clock)]),
        ltr_gate(&register),
    ])
    .apply(ctx, Point::ORIGIN)?;
    Ok(main)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = DESIGNS.iter().map(|d| d.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DESIGNS.len());
    }

    #[test]
    fn every_design_has_a_valid_main() {
        for design in DESIGNS {
            let mut ctx = Context::new();
            let root = ctx
                .set_main_circuit(design.build)
                .unwrap_or_else(|e| panic!("{}: {e}", design.name));
            assert_eq!(ctx.circuit_name(root), Some("main"));
            assert!(!ctx.toplevel_gates().is_empty());
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(find_design("register").unwrap().name, "register");
        assert!(find_design("nope").is_none());
    }

    #[test]
    fn register_demo_toplevel() {
        let mut ctx = Context::new();
        ctx.set_main_circuit(register_demo).unwrap();
        let top = ctx.toplevel_gates();
        assert_eq!(top.len(), 11);
        assert_eq!(ctx.circuit_name(top[10]), Some("8 bit register"));
    }
}
