//! The frontier (open list): known-but-unexamined nodes.
//!
//! Logically a map from value to the best known [`ScoredNode`] for that
//! value, with minimum-cost extraction. The realization is a `BinaryHeap`
//! beside a value→live-entry index: replacing an entry leaves the old heap
//! element in place as a stale record, and `take_best` skips stale records
//! on the way out (lazy decrease-key). At most one *live* entry exists per
//! distinct value at any time.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::node::{Node, ScoredNode};

/// The heap ordering key: `(cost_distance, sequence)`.
///
/// Lower `cost_distance` first under `f32::total_cmp`; ties broken toward
/// the older insertion. The sequence number also identifies which heap
/// element is the live one for its value.
#[derive(Debug, Clone, Copy)]
struct FrontierKey {
    cost_distance: f32,
    sequence: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost_distance
            .total_cmp(&other.cost_distance)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// A heap element wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is stored under `Reverse` to get
/// min-heap behavior (lowest `cost_distance` first).
#[derive(Debug)]
struct FrontierEntry<V> {
    key: Reverse<FrontierKey>,
    node: Node<V>,
}

impl<V> PartialEq for FrontierEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<V> Eq for FrontierEntry<V> {}

impl<V> PartialOrd for FrontierEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for FrontierEntry<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// The live-index record for a value: the cost and sequence number of the
/// single heap element currently standing for it.
#[derive(Debug, Clone, Copy)]
struct LiveEntry {
    cost_distance: f32,
    sequence: u64,
}

/// Duplicate-suppressing min-extraction frontier.
pub struct Frontier<V> {
    heap: BinaryHeap<FrontierEntry<V>>,
    live: HashMap<V, LiveEntry>,
    next_sequence: u64,
    high_water: usize,
}

impl<V: Clone + Eq + Hash> Frontier<V> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a frontier pre-sized for roughly `capacity` live entries.
    ///
    /// The hint only avoids reallocation; a wrong value never affects
    /// correctness.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            live: HashMap::with_capacity(capacity),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Insert a candidate unless a live entry for the same value already has
    /// an equal or lower `cost_distance`.
    ///
    /// A strictly worse live entry is superseded: the candidate (including
    /// its parent provenance) becomes the live entry for the value and the
    /// old heap element goes stale. Returns `true` if the candidate was
    /// admitted.
    pub fn insert_if_better(&mut self, candidate: ScoredNode<V>) -> bool {
        let cost_distance = candidate.cost_distance();
        if let Some(existing) = self.live.get(candidate.node().value()) {
            if existing.cost_distance <= cost_distance {
                return false;
            }
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let node = candidate.into_node();
        self.live.insert(
            node.value().clone(),
            LiveEntry {
                cost_distance,
                sequence,
            },
        );
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey {
                cost_distance,
                sequence,
            }),
            node,
        });

        if self.live.len() > self.high_water {
            self.high_water = self.live.len();
        }
        true
    }

    /// Remove and return the node with the minimum `cost_distance`, or
    /// `None` if the frontier is empty.
    ///
    /// Stale heap elements left behind by `insert_if_better` replacements
    /// are discarded on the way out.
    #[must_use]
    pub fn take_best(&mut self) -> Option<Node<V>> {
        while let Some(entry) = self.heap.pop() {
            let is_live = self
                .live
                .get(entry.node.value())
                .is_some_and(|live| live.sequence == entry.key.0.sequence);
            if is_live {
                self.live.remove(entry.node.value());
                return Some(entry.node);
            }
        }
        None
    }

    /// Number of live entries (distinct values awaiting examination).
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no live entries remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// High-water mark of live entries.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<V: Clone + Eq + Hash> Default for Frontier<V> {
    fn default() -> Self {
        Self::new()
    }
}
