//! Minimal priority queue backing the A* open set.

/// Min-priority queue over an unordered vector.
///
/// `enqueue` appends and `dequeue` scans every entry for the lowest priority, so
/// both `dequeue` and `contains` are O(n). On the grid sizes this crate targets the
/// scan is cheaper than maintaining a heap with decrease-key.
///
/// There is no decrease-key: a better priority for an item is recorded by enqueueing
/// it again, and the older entry is left behind for the caller to skip.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    elements: Vec<(T, f32)>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        PriorityQueue {
            elements: Vec::new(),
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn enqueue(&mut self, item: T, priority: f32) {
        self.elements.push((item, priority));
    }

    /// Removes and returns the item with the lowest priority.
    /// Ties go to the entry that was enqueued first.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }

        let mut best_index = 0;
        for (i, (_, priority)) in self.elements.iter().enumerate().skip(1) {
            if *priority < self.elements[best_index].1 {
                best_index = i;
            }
        }

        // `remove` keeps insertion order for the tie-break above.
        Some(self.elements.remove(best_index).0)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T: PartialEq> PriorityQueue<T> {
    /// Returns true if any entry equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.elements.iter().any(|(e, _)| e == item)
    }
}
