//! Gate definitions for primitives and subcircuits.
//!
//! A [`Gate`] is either a primitive with a fixed signature or a named
//! [`Circuit`] that owns an ordered list of child gates. Every gate owns one
//! input bundle and one output bundle for its whole life.

use crate::bundle::Bundle;
use crate::geometry::{Direction, Point};
use crate::ids::GateId;
use crate::types::Type;
use gatekit_common::Ident;
use serde::{Deserialize, Serialize};

/// The primitive gates understood by the downstream simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Two-input NAND.
    Nand,
    /// Constant logical 0.
    False,
    /// Constant logical 1.
    True,
    /// Forwards its input but turns an undefined value into a defined 0.
    ///
    /// Feedback loops such as latches start out undefined; routing the loop
    /// through an unerror gate gives them a known initial state.
    Unerror,
    /// An input driven from outside the circuit.
    Button,
    /// Drives `data` onto its output while `enable` is high, floats otherwise.
    Tristate,
}

impl Primitive {
    /// Every primitive, in a stable order.
    pub const ALL: [Primitive; 6] = [
        Primitive::Nand,
        Primitive::False,
        Primitive::True,
        Primitive::Unerror,
        Primitive::Button,
        Primitive::Tristate,
    ];

    /// The name used in exported netlists.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Nand => "nand",
            Primitive::False => "false",
            Primitive::True => "true",
            Primitive::Unerror => "unerror",
            Primitive::Button => "button",
            Primitive::Tristate => "tristate",
        }
    }

    /// The fixed input type of this primitive.
    pub fn input_type(self) -> Type {
        match self {
            Primitive::Nand => Type::bits(2),
            Primitive::False | Primitive::True | Primitive::Button => Type::unit(),
            Primitive::Unerror => Type::Bit,
            Primitive::Tristate => Type::dict([("data", Type::Bit), ("enable", Type::Bit)]),
        }
    }

    /// The fixed output type of this primitive. Every primitive drives one bit.
    pub fn output_type(self) -> Type {
        Type::Bit
    }
}

/// A subcircuit: a named container of child gates.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Interned circuit name, e.g. `adder1` or `8 bit register`.
    pub name: Ident,
    /// Children in construction order.
    pub gates: Vec<GateId>,
}

/// What a gate is.
#[derive(Debug, Clone)]
pub enum GateKind {
    /// A primitive gate.
    Primitive(Primitive),
    /// A subcircuit.
    Circuit(Circuit),
}

/// Where the layout pass put a gate and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GateLayout {
    /// Center of the gate.
    pub position: Point,
    /// Facing direction.
    pub direction: Direction,
}

/// A gate in the circuit graph.
#[derive(Debug, Clone)]
pub struct Gate {
    pub(crate) kind: GateKind,
    pub(crate) inputs: Bundle,
    pub(crate) outputs: Bundle,
    pub(crate) layout: GateLayout,
}

impl Gate {
    /// The gate's kind.
    pub fn kind(&self) -> &GateKind {
        &self.kind
    }

    /// The input bundle.
    pub fn inputs(&self) -> &Bundle {
        &self.inputs
    }

    /// The output bundle.
    pub fn outputs(&self) -> &Bundle {
        &self.outputs
    }

    /// The current layout; the default until a layout pass has run.
    pub fn layout(&self) -> GateLayout {
        self.layout
    }

    /// The primitive, if this gate is one.
    pub fn primitive(&self) -> Option<Primitive> {
        match self.kind {
            GateKind::Primitive(p) => Some(p),
            GateKind::Circuit(_) => None,
        }
    }

    /// The circuit, if this gate is one.
    pub fn circuit(&self) -> Option<&Circuit> {
        match &self.kind {
            GateKind::Circuit(c) => Some(c),
            GateKind::Primitive(_) => None,
        }
    }

    /// Child gates; empty for primitives.
    pub fn children(&self) -> &[GateId] {
        match &self.kind {
            GateKind::Circuit(c) => &c.gates,
            GateKind::Primitive(_) => &[],
        }
    }
}

/// What a builder gets back after adding a gate: its id and a copy of its
/// bundles to wire up.
#[derive(Debug, Clone)]
pub struct GateHandle {
    /// The new gate.
    pub id: GateId,
    /// The gate's input bundle.
    pub inputs: Bundle,
    /// The gate's output bundle.
    pub outputs: Bundle,
}

impl GateHandle {
    /// The parent to pass when building gates inside this circuit.
    pub fn scope(&self) -> Parent {
        Parent::Circuit(self.id)
    }
}

/// Where a new gate is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// The root slot, which accepts exactly one circuit while
    /// [`Context::set_main_circuit`](crate::Context::set_main_circuit) runs.
    Main,
    /// An existing circuit.
    Circuit(GateId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_names_are_unique() {
        let mut names: Vec<_> = Primitive::ALL.iter().map(|p| p.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Primitive::ALL.len());
    }

    #[test]
    fn primitive_signatures() {
        assert_eq!(Primitive::Nand.input_type().size(), 2);
        assert!(Primitive::Button.input_type().is_unit());
        assert!(Primitive::False.input_type().is_unit());
        assert_eq!(Primitive::Unerror.input_type(), Type::Bit);
        assert_eq!(
            Primitive::Tristate.input_type(),
            Type::dict([("enable", Type::Bit), ("data", Type::Bit)])
        );
        for p in Primitive::ALL {
            assert_eq!(p.output_type(), Type::Bit);
        }
    }

    #[test]
    fn primitive_serde_matches_name() {
        for p in Primitive::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.name()));
        }
    }

    #[test]
    fn handle_scope() {
        let handle = GateHandle {
            id: GateId::from_raw(3),
            inputs: Bundle::list([]),
            outputs: Bundle::list([]),
        };
        assert_eq!(handle.scope(), Parent::Circuit(GateId::from_raw(3)));
    }

    #[test]
    fn default_layout() {
        let layout = GateLayout::default();
        assert_eq!(layout.position, Point::ORIGIN);
        assert_eq!(layout.direction, Direction::Ltr);
    }
}
