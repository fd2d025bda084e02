//! Declarative layout for gatekit circuits.
//!
//! A layout is a small tree built next to a circuit's construction code:
//! [`Leaf`]s stand for gates, [`Flow`]s stack their children along a
//! [`Direction`]. Sizes are computed bottom-up; [`Layout::apply`] then walks
//! top-down and writes a center and facing onto every referenced gate.
//!
//! # Usage
//!
//! ```ignore
//! use gatekit_layout::{ltr_flow, ltr_gate, ttb_flow};
//!
//! ltr_flow(vec![
//!     ttb_flow(vec![ltr_gate(&xor), ltr_gate(&and)]),
//!     ltr_gate(&or),
//! ])
//! .apply(ctx, Point::ORIGIN)?;
//! ```

#![warn(missing_docs)]

mod snake;

pub use snake::{snake, snake_gates};

use gatekit_common::GateResult;
use gatekit_ir::{Context, Direction, GateHandle, GateId, GateLayout, Point};

/// Width and height of a layout box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent along `direction`'s axis.
    pub fn along(self, direction: Direction) -> f64 {
        if direction.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }
}

/// The box every gate occupies, whatever its kind.
pub const GATE_SIZE: Size = Size {
    width: 200.0,
    height: 200.0,
};

/// A single gate, placed facing `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    /// The gate to place.
    pub gate: GateId,
    /// Which way the gate faces.
    pub direction: Direction,
}

/// Children stacked one after another along `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    /// Stacking direction.
    pub direction: Direction,
    /// Children, first placed first.
    pub children: Vec<Layout>,
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// A gate.
    Leaf(Leaf),
    /// A stack of layouts.
    Flow(Flow),
}

impl Layout {
    /// A leaf for `gate` facing `direction`.
    pub fn leaf(gate: GateId, direction: Direction) -> Self {
        Layout::Leaf(Leaf { gate, direction })
    }

    /// A flow of `children` along `direction`.
    pub fn flow(direction: Direction, children: Vec<Layout>) -> Self {
        Layout::Flow(Flow {
            direction,
            children,
        })
    }

    /// Like [`Layout::flow`], with the direction given as a token such as `"ttb"`.
    pub fn flow_str(direction: &str, children: Vec<Layout>) -> GateResult<Self> {
        Ok(Layout::flow(direction.parse()?, children))
    }

    /// The bounding box of this layout.
    ///
    /// A leaf is always [`GATE_SIZE`]. A horizontal flow is as wide as its
    /// children together and as tall as its tallest child; a vertical flow is
    /// the transpose. An empty flow has zero size.
    pub fn size(&self) -> Size {
        match self {
            Layout::Leaf(_) => GATE_SIZE,
            Layout::Flow(flow) => {
                let sizes = flow.children.iter().map(Layout::size);
                if flow.direction.is_horizontal() {
                    sizes.fold(Size::default(), |acc, s| {
                        Size::new(acc.width + s.width, acc.height.max(s.height))
                    })
                } else {
                    sizes.fold(Size::default(), |acc, s| {
                        Size::new(acc.width.max(s.width), acc.height + s.height)
                    })
                }
            }
        }
    }

    /// Centers this layout on `center` and writes the result onto the gates.
    pub fn apply(&self, ctx: &mut Context, center: Point) -> GateResult<()> {
        match self {
            Layout::Leaf(leaf) => ctx.set_layout(
                leaf.gate,
                GateLayout {
                    position: center,
                    direction: leaf.direction,
                },
            ),
            Layout::Flow(flow) => flow.apply(ctx, center, self.size()),
        }
    }
}

impl Flow {
    fn apply(&self, ctx: &mut Context, center: Point, size: Size) -> GateResult<()> {
        // The cursor starts on the edge the flow comes from and moves with it.
        let (mut cursor, step) = match self.direction {
            Direction::Ltr => (center.x - size.width / 2.0, 1.0),
            Direction::Rtl => (center.x + size.width / 2.0, -1.0),
            Direction::Ttb => (center.y - size.height / 2.0, 1.0),
            Direction::Btt => (center.y + size.height / 2.0, -1.0),
        };

        for child in &self.children {
            let extent = child.size().along(self.direction);
            let middle = cursor + step * extent / 2.0;
            let child_center = if self.direction.is_horizontal() {
                Point::new(middle, center.y)
            } else {
                Point::new(center.x, middle)
            };
            child.apply(ctx, child_center)?;
            cursor += step * extent;
        }
        Ok(())
    }
}

/// A gate facing left to right.
pub fn ltr_gate(gate: &GateHandle) -> Layout {
    Layout::leaf(gate.id, Direction::Ltr)
}

/// A gate facing right to left.
pub fn rtl_gate(gate: &GateHandle) -> Layout {
    Layout::leaf(gate.id, Direction::Rtl)
}

/// A gate facing top to bottom.
pub fn ttb_gate(gate: &GateHandle) -> Layout {
    Layout::leaf(gate.id, Direction::Ttb)
}

/// A gate facing bottom to top.
pub fn btt_gate(gate: &GateHandle) -> Layout {
    Layout::leaf(gate.id, Direction::Btt)
}

/// Children laid out left to right.
pub fn ltr_flow(children: Vec<Layout>) -> Layout {
    Layout::flow(Direction::Ltr, children)
}

/// Children laid out right to left.
pub fn rtl_flow(children: Vec<Layout>) -> Layout {
    Layout::flow(Direction::Rtl, children)
}

/// Children laid out top to bottom.
pub fn ttb_flow(children: Vec<Layout>) -> Layout {
    Layout::flow(Direction::Ttb, children)
}

/// Children laid out bottom to top.
pub fn btt_flow(children: Vec<Layout>) -> Layout {
    Layout::flow(Direction::Btt, children)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use gatekit_common::GateError;
    use gatekit_ir::{GateHandle, Type};

    /// Builds a main circuit holding `count` buttons and returns their handles.
    pub(crate) fn buttons(count: usize) -> (Context, Vec<GateHandle>) {
        let mut ctx = Context::new();
        let mut handles = Vec::new();
        ctx.set_main_circuit(|ctx, parent| {
            let main = ctx.new_circuit(parent, "main", &Type::unit(), &Type::unit())?;
            for _ in 0..count {
                handles.push(ctx.button(main.scope())?);
            }
            Ok(main)
        })
        .unwrap();
        (ctx, handles)
    }

    pub(crate) fn position(ctx: &Context, gate: &GateHandle) -> Point {
        ctx.gate(gate.id).unwrap().layout().position
    }

    #[test]
    fn leaf_has_gate_size() {
        let layout = Layout::leaf(GateId::from_raw(0), Direction::Ltr);
        assert_eq!(layout.size(), GATE_SIZE);
    }

    #[test]
    fn horizontal_flow_size() {
        let (_, g) = buttons(3);
        let layout = ltr_flow(vec![
            ltr_gate(&g[0]),
            ttb_flow(vec![ltr_gate(&g[1]), ltr_gate(&g[2])]),
        ]);
        assert_eq!(layout.size(), Size::new(400.0, 400.0));
    }

    #[test]
    fn vertical_flow_size() {
        let (_, g) = buttons(3);
        let layout = btt_flow(vec![
            ltr_gate(&g[0]),
            rtl_flow(vec![ltr_gate(&g[1]), ltr_gate(&g[2])]),
        ]);
        assert_eq!(layout.size(), Size::new(400.0, 400.0));
        let column = ttb_flow(vec![ltr_gate(&g[0]), ltr_gate(&g[1]), ltr_gate(&g[2])]);
        assert_eq!(column.size(), Size::new(200.0, 600.0));
    }

    #[test]
    fn empty_flow_has_zero_size() {
        assert_eq!(ltr_flow(Vec::new()).size(), Size::default());
        assert_eq!(ttb_flow(Vec::new()).size(), Size::default());
    }

    #[test]
    fn ltr_places_children_left_to_right_without_overlap() {
        let (mut ctx, g) = buttons(2);
        ltr_flow(vec![ltr_gate(&g[0]), ltr_gate(&g[1])])
            .apply(&mut ctx, Point::ORIGIN)
            .unwrap();
        let a = position(&ctx, &g[0]);
        let b = position(&ctx, &g[1]);
        assert_eq!(a, Point::new(-100.0, 0.0));
        assert_eq!(b, Point::new(100.0, 0.0));
        assert!(a.x + GATE_SIZE.width / 2.0 <= b.x - GATE_SIZE.width / 2.0);
    }

    #[test]
    fn rtl_starts_from_the_right_edge() {
        let (mut ctx, g) = buttons(2);
        rtl_flow(vec![rtl_gate(&g[0]), rtl_gate(&g[1])])
            .apply(&mut ctx, Point::new(1000.0, 50.0))
            .unwrap();
        assert_eq!(position(&ctx, &g[0]), Point::new(1100.0, 50.0));
        assert_eq!(position(&ctx, &g[1]), Point::new(900.0, 50.0));
        assert_eq!(ctx.gate(g[0].id).unwrap().layout().direction, Direction::Rtl);
    }

    #[test]
    fn vertical_flows_hold_x_constant() {
        let (mut ctx, g) = buttons(3);
        ttb_flow(vec![ttb_gate(&g[0]), ttb_gate(&g[1]), ttb_gate(&g[2])])
            .apply(&mut ctx, Point::new(10.0, 0.0))
            .unwrap();
        assert_eq!(position(&ctx, &g[0]), Point::new(10.0, -200.0));
        assert_eq!(position(&ctx, &g[1]), Point::new(10.0, 0.0));
        assert_eq!(position(&ctx, &g[2]), Point::new(10.0, 200.0));

        btt_flow(vec![btt_gate(&g[0]), btt_gate(&g[1])])
            .apply(&mut ctx, Point::ORIGIN)
            .unwrap();
        assert_eq!(position(&ctx, &g[0]), Point::new(0.0, 100.0));
        assert_eq!(position(&ctx, &g[1]), Point::new(0.0, -100.0));
    }

    #[test]
    fn nested_flow_centers_smaller_children_on_cross_axis() {
        let (mut ctx, g) = buttons(3);
        ltr_flow(vec![
            ttb_flow(vec![ltr_gate(&g[0]), ltr_gate(&g[1])]),
            ltr_gate(&g[2]),
        ])
        .apply(&mut ctx, Point::ORIGIN)
        .unwrap();
        assert_eq!(position(&ctx, &g[0]), Point::new(-100.0, -100.0));
        assert_eq!(position(&ctx, &g[1]), Point::new(-100.0, 100.0));
        assert_eq!(position(&ctx, &g[2]), Point::new(100.0, 0.0));
    }

    #[test]
    fn flow_str_rejects_unknown_direction() {
        let err = Layout::flow_str("sideways", Vec::new()).unwrap_err();
        assert_eq!(err, GateError::InvalidDirection("sideways".to_string()));
        assert!(Layout::flow_str("btt", Vec::new()).is_ok());
    }

    #[test]
    fn unknown_gate_fails_to_apply() {
        let (mut ctx, _) = buttons(0);
        let err = Layout::leaf(GateId::from_raw(42), Direction::Ltr)
            .apply(&mut ctx, Point::ORIGIN)
            .unwrap_err();
        assert_eq!(err, GateError::UnknownGate(42));
    }
}
