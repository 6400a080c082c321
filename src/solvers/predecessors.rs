use hashbrown::HashMap;

use crate::dims::Dims;

/// Recorded for a cell that has no predecessor yet.
pub const MISSING: Dims = Dims(-1, -1);

/// Per-cell predecessor table: which cell the search stepped from to reach a
/// given cell. Every coordinate starts at [`MISSING`].
#[derive(Debug)]
pub struct Predecessors {
    table: HashMap<Dims, Dims>,
}

impl Predecessors {
    pub fn new(size: Dims) -> Self {
        let table = Dims::iter_fill(Dims::ZERO, size)
            .map(|pos| (pos, MISSING))
            .collect();

        Predecessors { table }
    }

    pub fn get(&self, pos: Dims) -> Dims {
        self.table.get(&pos).copied().unwrap_or(MISSING)
    }

    pub fn set(&mut self, pos: Dims, predecessor: Dims) {
        self.table.insert(pos, predecessor);
    }
}

/// Reconstructs the path recorded in `predecessors` by walking backward from
/// `end`, then reversing.
///
/// Returns the coordinates from `start` to `end` inclusive when the chain
/// from `end` actually passes through `start`. Otherwise — `end` was never
/// reached, or `start == end` — the result is empty. The empty self-path is a
/// deliberate contract the solvers rely on, not a missing case.
pub fn restore_path(start: Dims, end: Dims, predecessors: &Predecessors) -> Vec<Dims> {
    let mut inverted = Vec::new();
    let mut reached_start = false;

    let stop = predecessors.get(start);
    let mut current = end;
    while current != stop {
        if current == MISSING {
            // Dead-ended without passing the stop mark; no recorded path.
            return Vec::new();
        }

        inverted.push(current);
        current = predecessors.get(current);
        if current == start {
            reached_start = true;
        }
    }

    if !reached_start {
        return Vec::new();
    }

    inverted.reverse();
    inverted
}

#[cfg(test)]
mod tests {
    use super::{restore_path, Predecessors, MISSING};
    use crate::dims::Dims;

    #[test]
    fn starts_at_missing() {
        let table = Predecessors::new(Dims(2, 2));
        assert_eq!(table.get(Dims(1, 1)), MISSING);
        assert_eq!(table.get(Dims(5, 5)), MISSING);
    }

    #[test]
    fn restores_forward_path() {
        let mut table = Predecessors::new(Dims(3, 3));
        table.set(Dims(1, 0), Dims(0, 0));
        table.set(Dims(2, 0), Dims(1, 0));
        table.set(Dims(2, 1), Dims(2, 0));

        let path = restore_path(Dims(0, 0), Dims(2, 1), &table);
        assert_eq!(path, vec![Dims(0, 0), Dims(1, 0), Dims(2, 0), Dims(2, 1)]);
    }

    #[test]
    fn self_path_is_empty() {
        let mut table = Predecessors::new(Dims(3, 3));
        table.set(Dims(1, 0), Dims(0, 0));

        assert!(restore_path(Dims(0, 0), Dims(0, 0), &table).is_empty());
        assert!(restore_path(Dims(1, 0), Dims(1, 0), &table).is_empty());
    }

    #[test]
    fn unrecorded_end_is_empty() {
        let table = Predecessors::new(Dims(3, 3));
        assert!(restore_path(Dims(0, 0), Dims(2, 2), &table).is_empty());
    }

    #[test]
    fn chain_missing_start_is_empty() {
        // (2,2) chains back to (2,1) whose predecessor was never recorded,
        // so the walk never passes through (0,0).
        let mut table = Predecessors::new(Dims(3, 3));
        table.set(Dims(2, 2), Dims(2, 1));

        assert!(restore_path(Dims(0, 0), Dims(2, 2), &table).is_empty());
    }
}
