//! Shared helpers for the wayfind benchmark suite.

use wayfind_core::node::ScoredNode;
use wayfind_harness::worlds::grid::GridWorld;

/// Scored start nodes over `n` distinct integer values with scattered
/// costs, for frontier insert/extract workloads.
#[must_use]
pub fn scattered_candidates(n: u64) -> Vec<ScoredNode<u64>> {
    (0..n)
        .map(|i| {
            // Spread costs so extraction order differs from insertion order.
            #[allow(clippy::cast_precision_loss)]
            let cost = ((i * 7919) % n) as f32;
            ScoredNode::for_start(i, cost)
        })
        .collect()
}

/// An open square grid of the given side length.
#[must_use]
pub fn open_grid(side: i32) -> GridWorld {
    GridWorld::new(side, side)
}

/// A square grid with a near-full wall down the middle, forcing a detour
/// through a single gap.
#[must_use]
pub fn walled_grid(side: i32) -> GridWorld {
    let mut world = GridWorld::new(side, side);
    let mid = side / 2;
    world.block_rect(mid, 0, mid, side - 2);
    world
}
