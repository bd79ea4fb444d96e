//! The node arena backing one search: every discovered cell with its
//! best-known cost and predecessor link, plus the open-set ordering.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use octile_core::Point;

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// Stable handle to a node in its [`NodeStore`].
///
/// Nodes are rewritten in place and never removed while a search lives, so
/// an id stays valid even as the arena grows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// One discovered cell.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    coord: Point,
    g: i32,
    h: i32,
    parent: Option<NodeId>,
    open: bool,
}

impl Node {
    /// The cell this node stands for.
    #[inline]
    pub(crate) fn coord(&self) -> Point {
        self.coord
    }

    /// Cost accumulated from the start node.
    #[inline]
    pub(crate) fn g(&self) -> i32 {
        self.g
    }

    /// Search priority: accumulated cost plus heuristic estimate.
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }

    /// The best-known predecessor, `None` for the start node.
    #[inline]
    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether the node is still on the frontier.
    #[cfg(test)]
    pub(crate) fn is_open(&self) -> bool {
        self.open
    }
}

// ---------------------------------------------------------------------------
// Open-set ordering
// ---------------------------------------------------------------------------

/// Heap entry ordered by `f`, then by insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    id: NodeId,
    f: i32,
    seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; among
        // equal f, the earliest-pushed entry wins.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// NodeStore
// ---------------------------------------------------------------------------

/// Owns every node discovered by a single search.
///
/// The arena only grows: relaxation rewrites a node in place rather than
/// replacing it, which keeps at most one node per coordinate and keeps
/// predecessor ids from dangling. The open set is a binary heap with lazy
/// deletion: a relaxation pushes a fresh entry and [`best`](Self::best)
/// skips entries that no longer match their node.
pub(crate) struct NodeStore {
    nodes: Vec<Node>,
    index: HashMap<Point, NodeId>,
    open: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl NodeStore {
    /// Create an empty store with room for about `cells` nodes.
    pub(crate) fn with_capacity(cells: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cells),
            index: HashMap::with_capacity(cells),
            open: BinaryHeap::with_capacity(cells),
            seq: 0,
        }
    }

    /// Insert the start node: `g = 0`, the given estimate, no predecessor.
    /// Must be the first insertion.
    pub(crate) fn insert_start(&mut self, coord: Point, h: i32) -> NodeId {
        debug_assert!(self.nodes.is_empty(), "start node inserted twice");
        let id = NodeId(0);
        self.nodes.push(Node {
            coord,
            g: 0,
            h,
            parent: None,
            open: true,
        });
        self.index.insert(coord, id);
        self.push_open(id, h);
        id
    }

    /// Pop the open node with the lowest `f`, or `None` once the frontier
    /// is exhausted. Ties resolve to the earliest-inserted entry.
    pub(crate) fn best(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            let node = &self.nodes[entry.id.0];
            // Lazy deletion: drop entries for closed nodes and entries
            // superseded by a cheaper relaxation.
            if !node.open || entry.f > node.f() {
                continue;
            }
            return Some(entry.id);
        }
        None
    }

    /// Move a node from the open to the closed set. Closed nodes are final
    /// and never reopened.
    pub(crate) fn close(&mut self, id: NodeId) {
        self.nodes[id.0].open = false;
    }

    /// The relaxation rule. An undiscovered coordinate gets a fresh open
    /// node. An open node is rewritten (cost and predecessor, refreshing
    /// its heap position) only when `g` improves. Closed nodes are left
    /// untouched. Returns the id holding the coordinate afterwards.
    pub(crate) fn relax_or_insert(
        &mut self,
        coord: Point,
        g: i32,
        h: i32,
        parent: NodeId,
    ) -> NodeId {
        if let Some(&id) = self.index.get(&coord) {
            let node = &mut self.nodes[id.0];
            if !node.open || g >= node.g {
                return id;
            }
            node.g = g;
            node.parent = Some(parent);
            let f = node.f();
            self.push_open(id, f);
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            coord,
            g,
            h,
            parent: Some(parent),
            open: true,
        });
        self.index.insert(coord, id);
        self.push_open(id, g + h);
        id
    }

    /// The node behind an id.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of discovered nodes, open and closed.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push_open(&mut self, id: NodeId, f: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.open.push(OpenEntry { id, f, seq });
    }
}
