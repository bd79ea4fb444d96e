//! **octile-paths** — A* shortest-path search on octile grids.
//!
//! Movement is 8-way over a binary-passability [`Grid`](octile_core::Grid),
//! with fixed-point step costs (10 per cardinal move, 14 per diagonal) so
//! accumulated costs stay integral. The search keeps every discovered node
//! in a per-search arena and orders the frontier with a lazy-deletion
//! binary heap, so repeated relaxations never invalidate predecessor links.
//!
//! Entry points:
//!
//! - [`search`] — one call from start to goal, yielding a [`SearchOutcome`]
//! - [`Search`] — the same loop, advanced one [`step`](Search::step) at a
//!   time for callers that enforce deadlines between iterations
//!
//! The movement model is a trait ([`CostModel`]) with a stock
//! implementation, [`OctileCost`], whose goal-distance estimate is
//! selectable via [`Heuristic`]. Free distance functions live alongside:
//! [`manhattan`], [`chebyshev`], [`euclidean`], [`octile`].

mod arena;
mod astar;
mod cost;
mod distance;
mod path;

pub use astar::{Search, Status, search};
pub use cost::{CARDINAL_COST, CostModel, DIAGONAL_COST, Heuristic, MOVES, Move, OctileCost};
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use path::{Path, SearchOutcome};
