//! Bounded binary min-heap used to pick the next two nodes to merge.
//!
//! Nodes are ordered by weight, then by rank. A leaf's rank is its symbol value (0..=255) and
//! an internal node's rank is 256 plus the order in which it was created. Equal weights therefore
//! put leaves before internal nodes, leaves in ascending symbol order, and internal nodes oldest
//! first. Every node has a distinct rank, so the ordering is total and the tree built from a
//! given frequency table never changes between runs.

use std::cmp::Ordering;

use super::tree::Node;

/// At most 256 leaves plus the 255 internal nodes created while merging them.
pub const QUEUE_CAPACITY: usize = 256 + 255;

/// Sort key for a queued node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority {
    pub weight: u64,
    pub rank: u16,
}

impl Priority {
    pub fn leaf(weight: u64, symbol: u8) -> Self {
        Priority {
            weight,
            rank: symbol as u16,
        }
    }

    /// Key for the `seq`th internal node built by the tree builder.
    pub fn internal(weight: u64, seq: u16) -> Self {
        Priority {
            weight,
            rank: 256 + seq,
        }
    }
}

#[derive(Debug)]
struct Entry {
    priority: Priority,
    node: Node,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Min-heap of tree nodes. Capacity is fixed at [`QUEUE_CAPACITY`].
#[derive(Debug)]
pub struct PriorityQueue {
    elements: Vec<Entry>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            elements: Vec::with_capacity(QUEUE_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Priority of the node `extract_min` would return next.
    pub fn peek_priority(&self) -> Option<Priority> {
        self.elements.first().map(|e| e.priority)
    }

    /// Add a node. Panics if the queue already holds `QUEUE_CAPACITY` nodes.
    pub fn insert(&mut self, node: Node, priority: Priority) {
        assert!(
            self.elements.len() < QUEUE_CAPACITY,
            "priority queue overflow: capacity is {}",
            QUEUE_CAPACITY
        );
        self.elements.push(Entry { priority, node });
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the node with the smallest priority.
    /// Callers must check `is_empty` first; extracting from an empty queue panics.
    pub fn extract_min(&mut self) -> (Node, Priority) {
        assert!(!self.elements.is_empty(), "extract_min on an empty priority queue");
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let Entry { priority, node } = self.elements.swap_remove(last);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        (node, priority)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.elements[i] < self.elements[parent] {
                self.elements.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut smallest = i;
            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}
