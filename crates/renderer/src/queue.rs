//! Priority-ordered shape collection consumed by the compositor.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::shapes::Shape;

/// An owned min-heap of shapes keyed by `(z-index, insertion order)`.
///
/// Extraction yields ascending z-index; ties pop in insertion order, so a
/// fixed input sequence always drains identically. The queue is single-use:
/// the compositor drains it destructively, and a new tile render starts
/// from a fresh instance.
#[derive(Debug, Default)]
pub struct ShapeQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry {
    z: i32,
    seq: u64,
    shape: Shape,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.z == other.z && self.seq == other.seq
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
        self.z.cmp(&other.z).then(self.seq.cmp(&other.seq))
    }
}

impl ShapeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a shape keyed by its own z-index.
    pub fn push(&mut self, shape: Shape) {
        let entry = Entry {
            z: shape.z_index(),
            seq: self.next_seq,
            shape,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    /// Remove and return the lowest-priority remaining shape.
    pub fn pop(&mut self) -> Option<Shape> {
        self.heap.pop().map(|Reverse(entry)| entry.shape)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
