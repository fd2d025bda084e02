//! Boustrophedon layouts for long chains.

use crate::Layout;
use gatekit_common::{GateError, GateResult};
use gatekit_ir::{Direction, GateHandle};

/// Folds a long sequence into rows of `row_len`.
///
/// Row `i` is a flow in `first` for even `i` and in the reverse of `first`
/// for odd `i`, so consecutive items stay adjacent across row ends. The rows
/// are stacked along `second`. `place` builds each item's layout and receives
/// the direction of the row it lands in.
pub fn snake<T>(
    first: Direction,
    second: Direction,
    row_len: usize,
    items: impl IntoIterator<Item = T>,
    place: impl Fn(T, Direction) -> Layout,
) -> GateResult<Layout> {
    if row_len == 0 {
        return Err(GateError::InvalidRowLength);
    }

    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut direction = first;
    for item in items {
        row.push(place(item, direction));
        if row.len() == row_len {
            rows.push(Layout::flow(direction, std::mem::take(&mut row)));
            direction = direction.reversed();
        }
    }
    if !row.is_empty() {
        rows.push(Layout::flow(direction, row));
    }

    Ok(Layout::flow(second, rows))
}

/// [`snake`] over gates, each facing along its row.
pub fn snake_gates<'a>(
    first: Direction,
    second: Direction,
    row_len: usize,
    gates: impl IntoIterator<Item = &'a GateHandle>,
) -> GateResult<Layout> {
    snake(first, second, row_len, gates, |gate, direction| {
        Layout::leaf(gate.id, direction)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{buttons, position};
    use crate::Size;
    use gatekit_ir::Point;

    #[test]
    fn rows_alternate_direction() {
        let (mut ctx, g) = buttons(4);
        let layout = snake_gates(Direction::Ltr, Direction::Ttb, 2, &g).unwrap();
        assert_eq!(layout.size(), Size::new(400.0, 400.0));
        layout.apply(&mut ctx, Point::ORIGIN).unwrap();

        // row 0, left to right
        assert_eq!(position(&ctx, &g[0]), Point::new(-100.0, -100.0));
        assert_eq!(position(&ctx, &g[1]), Point::new(100.0, -100.0));
        // row 1, right to left
        assert_eq!(position(&ctx, &g[2]), Point::new(100.0, 100.0));
        assert_eq!(position(&ctx, &g[3]), Point::new(-100.0, 100.0));

        let facing = |i: usize| ctx.gate(g[i].id).unwrap().layout().direction;
        assert_eq!(facing(1), Direction::Ltr);
        assert_eq!(facing(2), Direction::Rtl);
    }

    #[test]
    fn structure_matches_nested_flows() {
        let (_, g) = buttons(4);
        let layout = snake_gates(Direction::Ltr, Direction::Ttb, 2, &g).unwrap();
        let Layout::Flow(outer) = layout else {
            panic!("expected a flow");
        };
        assert_eq!(outer.direction, Direction::Ttb);
        assert_eq!(outer.children.len(), 2);
        let dirs: Vec<_> = outer
            .children
            .iter()
            .map(|row| match row {
                Layout::Flow(f) => f.direction,
                Layout::Leaf(_) => panic!("expected a row"),
            })
            .collect();
        assert_eq!(dirs, vec![Direction::Ltr, Direction::Rtl]);
    }

    #[test]
    fn last_row_may_be_short() {
        let (_, g) = buttons(5);
        let layout = snake_gates(Direction::Ttb, Direction::Ltr, 2, &g).unwrap();
        // three columns, the last holding one gate
        assert_eq!(layout.size(), Size::new(600.0, 400.0));
    }

    #[test]
    fn zero_row_length_is_rejected() {
        let (_, g) = buttons(1);
        let err = snake_gates(Direction::Ltr, Direction::Ttb, 0, &g).unwrap_err();
        assert_eq!(err, GateError::InvalidRowLength);
    }

    #[test]
    fn place_callback_sees_row_direction() {
        let (_, g) = buttons(3);
        let seen = std::cell::RefCell::new(Vec::new());
        snake(Direction::Btt, Direction::Rtl, 1, &g, |gate, direction| {
            seen.borrow_mut().push(direction);
            Layout::leaf(gate.id, direction)
        })
        .unwrap();
        assert_eq!(seen.into_inner(), vec![Direction::Btt, Direction::Ttb, Direction::Btt]);
    }
}
