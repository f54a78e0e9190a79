//! `GridWorld`: a bounded 2D grid with blocked cells.
//!
//! Movement is 4-way at unit cost; the heuristic is Manhattan distance,
//! which is admissible under that movement rule.

use std::collections::HashSet;
use std::fmt;

use wayfind_core::contract::NodeProvider;
use wayfind_core::node::Node;

/// A grid coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four unit-cost movement offsets.
const OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A `width × height` grid over cells `(0..width, 0..height)` with a
/// mutable set of blocked cells.
pub struct GridWorld {
    width: i32,
    height: i32,
    blocked: HashSet<Cell>,
}

impl GridWorld {
    /// Create an open grid. Both dimensions must be positive.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            blocked: HashSet::new(),
        }
    }

    /// Block a single cell. Blocking out-of-bounds cells is harmless.
    pub fn block(&mut self, x: i32, y: i32) {
        self.blocked.insert(Cell::new(x, y));
    }

    /// Block every cell in the inclusive rectangle `(x0, y0)..=(x1, y1)`.
    pub fn block_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        for x in x0..=x1 {
            for y in y0..=y1 {
                self.block(x, y);
            }
        }
    }

    /// Whether a cell is inside the grid and not blocked.
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.width
            && cell.y >= 0
            && cell.y < self.height
            && !self.blocked.contains(&cell)
    }
}

impl NodeProvider<Cell> for GridWorld {
    fn adjacent_nodes(&self, node: &Node<Cell>) -> Vec<Node<Cell>> {
        let here = *node.value();
        OFFSETS
            .iter()
            .map(|&(dx, dy)| Cell::new(here.x + dx, here.y + dy))
            .filter(|&cell| self.is_open(cell))
            .map(|cell| node.successor(cell, 1.0))
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn min_distance_to_target(&self, value: &Cell, target: &Cell) -> f32 {
        ((value.x - target.x).abs() + (value.y - target.y).abs()) as f32
    }

    #[allow(clippy::cast_sign_loss)]
    fn node_count(&self) -> usize {
        (self.width * self.height) as usize
    }
}
