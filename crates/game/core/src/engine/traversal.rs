//! Round-robin pointer walk over the category x option grid.

use crate::state::{Category, Pointer};

/// Outcome of a pointer walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Walk {
    /// First `Waiting` cell after the starting point.
    Found(Pointer),
    /// A full orbit found no `Waiting` cell.
    Exhausted { scanned: usize },
}

/// Moves one cell right along the row, wrapping to column 0 of the next row
/// and from the last row back to row 0.
fn step(categories: &[Category], from: Pointer) -> Pointer {
    let width = categories
        .get(from.row)
        .map_or(0, |category| category.options().len());
    if from.col + 1 < width {
        Pointer::new(from.row, from.col + 1)
    } else {
        Pointer::new((from.row + 1) % categories.len(), 0)
    }
}

/// Walks from `from` (exclusive) to the next cell holding a `Waiting` option.
///
/// Resolved cells are skipped. The walk is bounded by one full orbit of the
/// grid, with the starting cell itself inspected last.
pub(crate) fn next_waiting(categories: &[Category], from: Pointer) -> Walk {
    if categories.is_empty() {
        return Walk::Exhausted { scanned: 0 };
    }

    // Each row costs at least one step, even when it has no options.
    let orbit: usize = categories
        .iter()
        .map(|category| category.options().len().max(1))
        .sum();

    let mut cursor = from;
    // One extra step covers a starting row that no longer exists.
    for _ in 0..=orbit {
        cursor = step(categories, cursor);
        let waiting = categories[cursor.row]
            .options()
            .get(cursor.col)
            .is_some_and(|option| option.state().is_waiting());
        if waiting {
            return Walk::Found(cursor);
        }
    }

    Walk::Exhausted { scanned: orbit + 1 }
}
