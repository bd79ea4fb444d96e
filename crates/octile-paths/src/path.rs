use octile_core::Point;

use crate::arena::{NodeId, NodeStore};

/// An immutable start-to-goal cell sequence with its total movement cost.
///
/// Produced once by a successful search, endpoints included, and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Point>,
    cost: i32,
}

impl Path {
    /// The cells in order, start first, goal last.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Total movement cost of the route.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` in practice: a path carries at least its start cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }

    /// Whether the route passes through `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The result of a search: a complete path, or proof there is none.
///
/// An unreachable goal is an ordinary outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A shortest route from start to goal.
    Found(Path),
    /// Start and goal are not connected.
    NoPath,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Walk predecessor links from the terminal node back to the start node
/// (the one with no predecessor), then reverse into start-to-goal order.
pub(crate) fn reconstruct(store: &NodeStore, terminal: NodeId) -> Path {
    let mut cells = Vec::new();
    let mut cursor = Some(terminal);
    while let Some(id) = cursor {
        let node = store.node(id);
        cells.push(node.coord());
        cursor = node.parent();
    }
    cells.reverse();
    Path {
        cells,
        cost: store.node(terminal).g(),
    }
}
