//! Search node and cost-scored node types.
//!
//! A [`Node`] wraps a caller value (a coordinate pair, a tile id, a city
//! name, ...) together with its discovery provenance: the node through which
//! it was first reached and the accumulated path cost from the start. Nodes
//! are immutable after construction and share their parent chain through a
//! reference-counted link, so cloning is cheap and cycles are
//! unconstructible.

use std::rc::Rc;

#[derive(Debug)]
struct NodeInner<V> {
    value: V,
    parent: Option<Node<V>>,
    distance_from_start: f32,
}

/// An immutable search node: a caller value plus discovery provenance.
///
/// The parent link is a one-directional back-reference to an
/// earlier-constructed node; `distance_from_start` is derived at
/// construction and never independently settable, so it is monotonically
/// non-decreasing along any parent chain.
#[derive(Debug)]
pub struct Node<V> {
    inner: Rc<NodeInner<V>>,
}

impl<V> Clone for Node<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V> Node<V> {
    /// Construct a start node: no parent, zero distance from start.
    #[must_use]
    pub fn start(value: V) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                value,
                parent: None,
                distance_from_start: 0.0,
            }),
        }
    }

    /// Construct a successor discovered through `self` at the given
    /// non-negative step cost. The child's distance from start is
    /// `self.distance_from_start() + step_cost`.
    #[must_use]
    pub fn successor(&self, value: V, step_cost: f32) -> Self {
        debug_assert!(
            step_cost >= 0.0,
            "step cost must be non-negative, got {step_cost}"
        );
        Self {
            inner: Rc::new(NodeInner {
                value,
                parent: Some(self.clone()),
                distance_from_start: self.inner.distance_from_start + step_cost,
            }),
        }
    }

    /// The unique graph-state value this node wraps.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.inner.value
    }

    /// The node through which this node was discovered (`None` for the
    /// start node).
    #[must_use]
    pub fn parent(&self) -> Option<&Node<V>> {
        self.inner.parent.as_ref()
    }

    /// Accumulated path cost from the start node to this node.
    #[must_use]
    pub fn distance_from_start(&self) -> f32 {
        self.inner.distance_from_start
    }
}

/// A node paired with its A* priority.
///
/// `cost_distance = distance_from_start + min_distance_to_target`. The two
/// constructors are the only way to obtain a `ScoredNode`, so the value is
/// always consistent with the two-term formula. A `cost_distance` is only
/// meaningful relative to the single target it was scored against.
#[derive(Debug, Clone)]
pub struct ScoredNode<V> {
    node: Node<V>,
    cost_distance: f32,
}

impl<V> ScoredNode<V> {
    /// Score an already-discovered node against the target.
    #[must_use]
    pub fn new(node: Node<V>, min_distance_to_target: f32) -> Self {
        let cost_distance = min_distance_to_target + node.distance_from_start();
        Self {
            node,
            cost_distance,
        }
    }

    /// Score a raw start value: distance from start is zero, so the cost is
    /// the heuristic alone.
    #[must_use]
    pub fn for_start(value: V, min_distance_to_target: f32) -> Self {
        Self {
            node: Node::start(value),
            cost_distance: min_distance_to_target,
        }
    }

    /// The wrapped node.
    #[must_use]
    pub fn node(&self) -> &Node<V> {
        &self.node
    }

    /// Unwrap into the node, discarding the score.
    #[must_use]
    pub fn into_node(self) -> Node<V> {
        self.node
    }

    /// The A* priority: `distance_from_start + min_distance_to_target`.
    #[must_use]
    pub fn cost_distance(&self) -> f32 {
        self.cost_distance
    }
}
