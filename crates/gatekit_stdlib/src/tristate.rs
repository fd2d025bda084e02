//! Bus drivers.

use gatekit_common::GateResult;
use gatekit_ir::{Context, GateHandle, Parent, Point, Type};
use gatekit_layout::{ltr_gate, ttb_flow};

/// A `width`-bit tristate buffer, named `tristate buffer {width}`.
///
/// `{enable, data: [Bit; width]} -> [Bit; width]`: drives `data` onto the
/// outputs while `enable` is high and floats them otherwise.
pub fn tristate(width: usize) -> impl Fn(&mut Context, Parent) -> GateResult<GateHandle> {
    move |ctx, parent| {
        let input = Type::dict([("enable", Type::Bit), ("data", Type::bits(width))]);
        let circuit = ctx.new_circuit(
            parent,
            &format!("tristate buffer {width}"),
            &input,
            &Type::bits(width),
        )?;
        let (enable, data) = (circuit.inputs.field("enable")?, circuit.inputs.field("data")?);

        let mut buffers = Vec::with_capacity(width);
        for i in 0..width {
            let buffer = ctx.tristate_buffer(circuit.scope())?;
            ctx.connect(data.item(i)?, buffer.inputs.field("data")?)?;
            ctx.connect(enable, buffer.inputs.field("enable")?)?;
            ctx.connect(&buffer.outputs, circuit.outputs.item(i)?)?;
            buffers.push(buffer);
        }

        ttb_flow(buffers.iter().map(ltr_gate).collect()).apply(ctx, Point::ORIGIN)?;
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{child_names, instantiate};

    #[test]
    fn one_buffer_per_bit() {
        let (ctx, bus) = instantiate(tristate(3));
        assert_eq!(ctx.circuit_name(bus.id), Some("tristate buffer 3"));
        assert_eq!(child_names(&ctx, &bus), vec!["tristate"; 3]);
        assert_eq!(ctx.connections().len(), 9);
        assert_eq!(
            bus.inputs.ty(),
            Type::dict([("data", Type::bits(3)), ("enable", Type::Bit)])
        );
    }
}
