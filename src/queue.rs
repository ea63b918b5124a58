use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use ordered_float::OrderedFloat;

use crate::cell::Cell;
use crate::error::{PathError, Result};

/// Total-ordered cost type used for queue priorities and search distances.
pub type Cost = OrderedFloat<f64>;

/// A heap entry tagged with the insertion sequence number it was pushed
/// under.
struct QueueEntry {
    priority: Cost,
    seq: u64,
    cell: Cell,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both fields so the max-heap surfaces the smallest
        // priority first, and among equal priorities the oldest insertion.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// A min-priority queue over cells with lazy deletion.
///
/// [push_or_update](Self::push_or_update) never searches the heap: it bumps
/// the cell's live sequence number and pushes a fresh entry, leaving any
/// older entry behind as a tombstone that [pop_min](Self::pop_min) discards
/// when it surfaces. Ties on priority always pop in insertion order.
/// [contains](Self::contains), [len](Self::len) and
/// [is_empty](Self::is_empty) all answer for live entries only.
#[derive(Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<QueueEntry>,
    live: FxHashMap<Cell, u64>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new() -> PriorityQueue {
        PriorityQueue::default()
    }

    /// Inserts `cell` at `priority`, or moves it there if already queued.
    pub fn push_or_update(&mut self, cell: Cell, priority: Cost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(cell, seq);
        self.heap.push(QueueEntry {
            priority,
            seq,
            cell,
        });
    }

    /// Whether `cell` currently sits in the queue.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.live.contains_key(cell)
    }

    /// Removes and returns the cell with the smallest priority, or
    /// [PathError::EmptyQueue] when no live entry remains.
    pub fn pop_min(&mut self) -> Result<Cell> {
        while let Some(entry) = self.heap.pop() {
            // A sequence number the cell has moved past marks a tombstone.
            if self.live.get(&entry.cell) == Some(&entry.seq) {
                self.live.remove(&entry.cell);
                return Ok(entry.cell);
            }
        }
        Err(PathError::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
