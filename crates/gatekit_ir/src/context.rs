//! The build session.
//!
//! A [`Context`] owns everything a design is made of: the gate arena, the
//! wire identity allocator, the circuit name interner, and the ordered list
//! of connections. Builders receive it by `&mut` and record gates and
//! connections through it; nothing is global.

use crate::arena::Arena;
use crate::bundle::{BitAllocator, Bundle};
use crate::gate::{Circuit, Gate, GateHandle, GateKind, GateLayout, Parent, Primitive};
use crate::ids::GateId;
use crate::types::Type;
use gatekit_common::{GateError, GateResult, Interner};

/// A type-checked wiring from one bundle to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// The driving side.
    pub from: Bundle,
    /// The driven side.
    pub to: Bundle,
}

/// A circuit under construction.
#[derive(Debug, Default)]
pub struct Context {
    gates: Arena<GateId, Gate>,
    connections: Vec<Connection>,
    bits: BitAllocator,
    names: Interner,
    main: Option<GateId>,
    main_open: bool,
}

impl Context {
    /// Creates an empty build session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bundle of the given type made of fresh wires.
    pub fn make_bundle(&mut self, ty: &Type) -> Bundle {
        ty.make_bundle(&mut self.bits)
    }

    /// Adds a subcircuit named `name` under `parent`.
    ///
    /// `Parent::Main` is only accepted once, from inside
    /// [`set_main_circuit`](Self::set_main_circuit).
    pub fn new_circuit(
        &mut self,
        parent: Parent,
        name: &str,
        input_type: &Type,
        output_type: &Type,
    ) -> GateResult<GateHandle> {
        let inputs = self.make_bundle(input_type);
        let outputs = self.make_bundle(output_type);
        let name = self.names.get_or_intern(name);
        let kind = GateKind::Circuit(Circuit {
            name,
            gates: Vec::new(),
        });

        match parent {
            Parent::Main => {
                if self.main.is_some() {
                    return Err(GateError::MainAlreadyDefined);
                }
                if !self.main_open {
                    return Err(GateError::OutsideCircuit);
                }
                let id = self.alloc(kind, inputs.clone(), outputs.clone());
                self.main = Some(id);
                Ok(GateHandle {
                    id,
                    inputs,
                    outputs,
                })
            }
            Parent::Circuit(parent) => self.attach(parent, kind, inputs, outputs),
        }
    }

    /// Adds a primitive gate with caller-supplied bundles.
    ///
    /// Unlike the typed constructors, the bundles are not checked against the
    /// primitive's signature here; the netlist flattener rejects mismatches.
    pub fn add_gate(
        &mut self,
        parent: Parent,
        primitive: Primitive,
        inputs: Bundle,
        outputs: Bundle,
    ) -> GateResult<GateHandle> {
        match parent {
            Parent::Main => Err(GateError::OutsideCircuit),
            Parent::Circuit(parent) => {
                self.attach(parent, GateKind::Primitive(primitive), inputs, outputs)
            }
        }
    }

    /// Adds a primitive gate with fresh bundles of its fixed signature.
    pub fn primitive(&mut self, parent: Parent, primitive: Primitive) -> GateResult<GateHandle> {
        let inputs = self.make_bundle(&primitive.input_type());
        let outputs = self.make_bundle(&primitive.output_type());
        self.add_gate(parent, primitive, inputs, outputs)
    }

    /// Adds a NAND gate: `[Bit, Bit]` in, `Bit` out.
    pub fn nand(&mut self, parent: Parent) -> GateResult<GateHandle> {
        self.primitive(parent, Primitive::Nand)
    }

    /// Adds a constant-0 gate: `[]` in, `Bit` out.
    pub fn constant_false(&mut self, parent: Parent) -> GateResult<GateHandle> {
        self.primitive(parent, Primitive::False)
    }

    /// Adds a constant-1 gate: `[]` in, `Bit` out.
    pub fn constant_true(&mut self, parent: Parent) -> GateResult<GateHandle> {
        self.primitive(parent, Primitive::True)
    }

    /// Adds an unerror gate: `Bit` in, `Bit` out.
    pub fn unerror(&mut self, parent: Parent) -> GateResult<GateHandle> {
        self.primitive(parent, Primitive::Unerror)
    }

    /// Adds an externally driven button: `[]` in, `Bit` out.
    pub fn button(&mut self, parent: Parent) -> GateResult<GateHandle> {
        self.primitive(parent, Primitive::Button)
    }

    /// Adds a tristate buffer: `{data: Bit, enable: Bit}` in, `Bit` out.
    pub fn tristate_buffer(&mut self, parent: Parent) -> GateResult<GateHandle> {
        self.primitive(parent, Primitive::Tristate)
    }

    /// Records a connection from `from` to `to`.
    ///
    /// The two bundles must have equal types. Fan-in, fan-out, and feedback
    /// loops are all allowed.
    pub fn connect(&mut self, from: &Bundle, to: &Bundle) -> GateResult<()> {
        let (from_ty, to_ty) = (from.ty(), to.ty());
        if from_ty != to_ty {
            return Err(GateError::TypeMismatch {
                from: from_ty.to_string(),
                to: to_ty.to_string(),
            });
        }
        self.connections.push(Connection {
            from: from.clone(),
            to: to.clone(),
        });
        Ok(())
    }

    /// Connects each gate's outputs to the next gate's inputs.
    pub fn connect_chain<'a>(
        &mut self,
        gates: impl IntoIterator<Item = &'a GateHandle>,
    ) -> GateResult<()> {
        let gates: Vec<&GateHandle> = gates.into_iter().collect();
        for pair in gates.windows(2) {
            self.connect(&pair[0].outputs, &pair[1].inputs)?;
        }
        Ok(())
    }

    /// Runs `main` to build the root circuit and checks its signature.
    ///
    /// `main` receives [`Parent::Main`] and must create exactly one circuit
    /// there, with empty input and output types.
    pub fn set_main_circuit<F>(&mut self, main: F) -> GateResult<GateId>
    where
        F: FnOnce(&mut Context, Parent) -> GateResult<GateHandle>,
    {
        if self.main.is_some() {
            return Err(GateError::MainAlreadyDefined);
        }

        self.main_open = true;
        let built = main(self, Parent::Main);
        self.main_open = false;

        let checked = built.and_then(|_| self.check_main());
        if checked.is_err() {
            self.main = None;
        }
        checked
    }

    fn check_main(&self) -> GateResult<GateId> {
        let id = self.main.ok_or(GateError::MissingMainCircuit)?;
        let root = &self.gates[id];
        for (side, bundle) in [("inputs", &root.inputs), ("outputs", &root.outputs)] {
            let ty = bundle.ty();
            if !ty.is_unit() {
                return Err(GateError::InvalidMainSignature {
                    side,
                    ty: ty.to_string(),
                });
            }
        }
        Ok(id)
    }

    /// The root circuit, once [`set_main_circuit`](Self::set_main_circuit) succeeded
    /// or while it runs. A failed call leaves no root behind.
    pub fn main_circuit(&self) -> Option<GateId> {
        self.main
    }

    /// The children of the root circuit, in construction order.
    pub fn toplevel_gates(&self) -> &[GateId] {
        match self.main.and_then(|id| self.gates.get(id)) {
            Some(root) => root.children(),
            None => &[],
        }
    }

    /// Looks up a gate.
    pub fn gate(&self, id: GateId) -> GateResult<&Gate> {
        self.gates.get(id).ok_or(GateError::UnknownGate(id.as_raw()))
    }

    /// The number of gates, root included.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// All connections in the order they were made.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The name of a circuit gate; `None` for primitives and unknown ids.
    pub fn circuit_name(&self, id: GateId) -> Option<&str> {
        let circuit = self.gates.get(id)?.circuit()?;
        self.names.try_resolve(circuit.name)
    }

    /// Overwrites the layout of a gate.
    pub fn set_layout(&mut self, id: GateId, layout: GateLayout) -> GateResult<()> {
        let gate = self
            .gates
            .get_mut(id)
            .ok_or(GateError::UnknownGate(id.as_raw()))?;
        gate.layout = layout;
        Ok(())
    }

    fn alloc(&mut self, kind: GateKind, inputs: Bundle, outputs: Bundle) -> GateId {
        self.gates.alloc(Gate {
            kind,
            inputs,
            outputs,
            layout: GateLayout::default(),
        })
    }

    fn attach(
        &mut self,
        parent: GateId,
        kind: GateKind,
        inputs: Bundle,
        outputs: Bundle,
    ) -> GateResult<GateHandle> {
        match self.gates.get(parent).map(Gate::kind) {
            Some(GateKind::Circuit(_)) => {}
            Some(GateKind::Primitive(_)) => return Err(GateError::NotACircuit(parent.as_raw())),
            None => return Err(GateError::UnknownGate(parent.as_raw())),
        }

        let id = self.alloc(kind, inputs.clone(), outputs.clone());
        if let Some(Gate {
            kind: GateKind::Circuit(circuit),
            ..
        }) = self.gates.get_mut(parent)
        {
            circuit.gates.push(id);
        }
        Ok(GateHandle {
            id,
            inputs,
            outputs,
        })
    }
}
