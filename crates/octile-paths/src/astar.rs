use octile_core::{Grid, Point};

use crate::arena::{NodeId, NodeStore};
use crate::cost::CostModel;
use crate::path::{SearchOutcome, reconstruct};

/// Where a search stands. [`Found`](Status::Found) and
/// [`Exhausted`](Status::Exhausted) are terminal: once reached, further
/// [`step`](Search::step) calls change nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Open nodes remain and the goal has not been closed yet.
    Running,
    /// The goal node was popped and closed; a path exists.
    Found,
    /// The open set ran dry before the goal was reached; no path exists.
    Exhausted,
}

/// A single A* search over one grid.
///
/// [`run`](Self::run) drives the search to completion. Callers that need a
/// deadline instead call [`step`](Self::step) in a loop, checking elapsed
/// time between iterations and treating a timeout like
/// [`Status::Exhausted`]. Each `Search` owns its node store outright, so
/// concurrent searches share nothing.
pub struct Search<'a, M: CostModel> {
    grid: &'a Grid,
    model: &'a M,
    goal: Point,
    store: NodeStore,
    status: Status,
    terminal: Option<NodeId>,
}

impl<'a, M: CostModel> Search<'a, M> {
    /// Prepare a search from `start` to `goal`.
    ///
    /// Both endpoints must lie inside the grid; handing in an out-of-bounds
    /// coordinate is a caller bug.
    pub fn new(grid: &'a Grid, model: &'a M, start: Point, goal: Point) -> Self {
        debug_assert!(grid.in_bounds(start), "start {start} out of bounds");
        debug_assert!(grid.in_bounds(goal), "goal {goal} out of bounds");
        let cells = (grid.width() as usize) * (grid.height() as usize);
        let mut store = NodeStore::with_capacity(cells);
        store.insert_start(start, model.estimate(start, goal));
        Self {
            grid,
            model,
            goal,
            store,
            status: Status::Running,
            terminal: None,
        }
    }

    /// The current status.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of nodes discovered so far, open and closed. Starts at 1
    /// (the start node) and only grows.
    #[inline]
    pub fn discovered(&self) -> usize {
        self.store.len()
    }

    /// Advance the search by one iteration: pop the best open node, close
    /// it, test it against the goal, and otherwise expand its neighbors.
    /// Returns the status after the iteration.
    pub fn step(&mut self) -> Status {
        if self.status != Status::Running {
            return self.status;
        }
        let Some(current) = self.store.best() else {
            self.status = Status::Exhausted;
            return self.status;
        };
        // The popped node's g is final. Close it before the goal test, so
        // a found goal is already closed when reconstruction reads it.
        self.store.close(current);
        let coord = self.store.node(current).coord();
        if coord == self.goal {
            self.terminal = Some(current);
            self.status = Status::Found;
            return self.status;
        }
        let g = self.store.node(current).g();
        for &mv in self.model.moves() {
            let neighbor = coord + mv.offset;
            // Out-of-bounds and blocked cells alike are simply skipped.
            if !self.grid.is_passable(neighbor) {
                continue;
            }
            let estimate = self.model.estimate(neighbor, self.goal);
            self.store
                .relax_or_insert(neighbor, g + mv.cost, estimate, current);
        }
        Status::Running
    }

    /// Drive the search to a terminal status and return its outcome.
    pub fn run(mut self) -> SearchOutcome {
        while self.step() == Status::Running {}
        self.into_outcome()
    }

    /// Convert a finished search into its outcome, reconstructing the path
    /// when the goal was found.
    ///
    /// # Panics
    ///
    /// Panics if the search is still [`Status::Running`]; only a terminal
    /// search has an outcome.
    pub fn into_outcome(self) -> SearchOutcome {
        match (self.status, self.terminal) {
            (Status::Found, Some(id)) => SearchOutcome::Found(reconstruct(&self.store, id)),
            (Status::Exhausted, _) => SearchOutcome::NoPath,
            _ => panic!("search has no outcome before reaching a terminal status"),
        }
    }
}

/// Search `grid` from `start` to `goal` in one call.
///
/// Returns [`SearchOutcome::Found`] with the full path (both endpoints
/// included) or [`SearchOutcome::NoPath`] when the goal is unreachable.
pub fn search<M: CostModel>(grid: &Grid, model: &M, start: Point, goal: Point) -> SearchOutcome {
    Search::new(grid, model, start, goal).run()
}
