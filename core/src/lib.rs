//! Wayfind core: an incremental best-first (A*) path-search engine.
//!
//! The engine is domain-agnostic: graph topology, movement costs, and
//! heuristic estimates all come from a caller-supplied [`NodeProvider`].
//! The core never sees a "tile" or a "grid" — only opaque values that
//! support equality and hashing.
//!
//! # Module dependency direction
//!
//! `node` ← `frontier` ← `pathfinder`
//!
//! One-way only. `contract` depends on `node` alone.
//!
//! # Key types
//!
//! - [`Node`] — immutable value wrapper with discovery provenance
//! - [`ScoredNode`] — a node paired with its A* priority (`g + h`)
//! - [`Frontier`] — the open list: duplicate-suppressing min-extraction
//! - [`NodeProvider`] — trait supplying adjacency, heuristic, and sizing
//! - [`Pathfinder`] — the search session state machine
//!
//! [`Node`]: node::Node
//! [`ScoredNode`]: node::ScoredNode
//! [`Frontier`]: frontier::Frontier
//! [`NodeProvider`]: contract::NodeProvider
//! [`Pathfinder`]: pathfinder::Pathfinder

#![forbid(unsafe_code)]

pub mod contract;
pub mod frontier;
pub mod node;
pub mod pathfinder;

pub use contract::NodeProvider;
pub use frontier::Frontier;
pub use node::{Node, ScoredNode};
pub use pathfinder::{reconstruct_path, Pathfinder, SearchStatus};
