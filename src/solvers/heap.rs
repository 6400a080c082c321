use crate::dims::Dims;

/// A heap entry: a cell and the weight it is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub vertex: Dims,
    pub weight: u64,
}

/// Binary min-heap over [`Item`] weights; ties pop in arbitrary order.
///
/// Shared by Dijkstra (global frontier) and the heap-guided DFS (per-cell
/// neighbor ordering).
#[derive(Debug, Default)]
pub struct Heap {
    items: Vec<Item>,
}

impl Heap {
    pub fn new() -> Self {
        Heap { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum-weight item.
    ///
    /// Panics on an empty heap; callers check [`Heap::len`] first or rely on
    /// a loop invariant that guarantees non-emptiness.
    pub fn pop(&mut self) -> Item {
        assert!(!self.items.is_empty(), "pop from an empty heap");

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let item = self.items.pop().unwrap();
        if !self.items.is_empty() {
            self.sift_down(0);
        }

        item
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.items[idx].weight >= self.items[parent].weight {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = idx * 2 + 1;
            let right = left + 1;

            let mut smallest = idx;
            if left < self.items.len() && self.items[left].weight < self.items[smallest].weight {
                smallest = left;
            }
            if right < self.items.len() && self.items[right].weight < self.items[smallest].weight {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.items.swap(idx, smallest);
            idx = smallest;
        }
    }
}
