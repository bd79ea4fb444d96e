//! The movement model: which single steps exist, what they cost, and how
//! remaining cost to the goal is estimated.

use octile_core::Point;

use crate::distance::{chebyshev, euclidean, manhattan, octile};

/// Cost of an axis-aligned step (fixed-point 1.0).
pub const CARDINAL_COST: i32 = 10;

/// Cost of a diagonal step (fixed-point approximation of √2).
///
/// Costs are scaled by 10 so `g` accumulates in integers with no
/// floating-point drift.
pub const DIAGONAL_COST: i32 = 14;

/// One legal step: a relative offset and its traversal cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub offset: Point,
    pub cost: i32,
}

/// The eight Moore-neighborhood moves. Expansion order is fixed so that
/// equal-cost searches stay deterministic.
pub const MOVES: [Move; 8] = [
    Move { offset: Point::new(-1, -1), cost: DIAGONAL_COST },
    Move { offset: Point::new(-1, 0), cost: CARDINAL_COST },
    Move { offset: Point::new(-1, 1), cost: DIAGONAL_COST },
    Move { offset: Point::new(0, -1), cost: CARDINAL_COST },
    Move { offset: Point::new(0, 1), cost: CARDINAL_COST },
    Move { offset: Point::new(1, -1), cost: DIAGONAL_COST },
    Move { offset: Point::new(1, 0), cost: CARDINAL_COST },
    Move { offset: Point::new(1, 1), cost: DIAGONAL_COST },
];

/// Goal-distance estimates selectable on [`OctileCost`].
///
/// Every variant is admissible under the 10/14 step costs, so any choice
/// yields an optimal path cost. `Manhattan` (the default), `Chebyshev` and
/// `Euclidean` are plain cell distances, roughly a factor of ten below the
/// fixed-point step costs — safely under the true remaining cost, but weak
/// guidance, so the search expands more nodes. `Octile` is scaled to the
/// step costs and equals the true remaining cost over open ground, which
/// prunes hardest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// `|dx| + |dy|`, un-scaled.
    #[default]
    Manhattan,
    /// `max(|dx|, |dy|)`, un-scaled.
    Chebyshev,
    /// Straight-line distance truncated to an integer, un-scaled.
    Euclidean,
    /// The exact obstacle-free 8-way cost, in step-cost units.
    Octile,
}

impl Heuristic {
    /// Estimate the remaining cost from `a` to `b`.
    #[inline]
    pub fn estimate(self, a: Point, b: Point) -> i32 {
        match self {
            Self::Manhattan => manhattan(a, b),
            Self::Chebyshev => chebyshev(a, b),
            Self::Euclidean => euclidean(a, b),
            Self::Octile => octile(a, b),
        }
    }
}

/// Supplies the legal moves and the goal-distance estimate for a search.
pub trait CostModel {
    /// The single-step moves, each with its traversal cost (> 0).
    fn moves(&self) -> &[Move];

    /// Heuristic estimate of remaining cost from `a` to `b`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, a: Point, b: Point) -> i32;
}

/// Eight-way movement at fixed-point costs: 10 per cardinal step,
/// 14 per diagonal step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OctileCost {
    /// The goal-distance estimate to search with.
    pub heuristic: Heuristic,
}

impl OctileCost {
    /// The default model: Manhattan estimate.
    pub const fn new() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
        }
    }

    /// A model searching with the given estimate.
    pub const fn with_heuristic(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl CostModel for OctileCost {
    fn moves(&self) -> &[Move] {
        &MOVES
    }

    fn estimate(&self, a: Point, b: Point) -> i32 {
        self.heuristic.estimate(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_cover_the_moore_neighborhood() {
        assert_eq!(MOVES.len(), 8);
        for mv in &MOVES {
            let Point { x, y } = mv.offset;
            assert!(x.abs() <= 1 && y.abs() <= 1);
            assert_ne!(mv.offset, Point::ZERO);
            let expected = if x != 0 && y != 0 {
                DIAGONAL_COST
            } else {
                CARDINAL_COST
            };
            assert_eq!(mv.cost, expected);
        }
    }

    #[test]
    fn estimates_at_known_distances() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 3);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7);
        assert_eq!(Heuristic::Chebyshev.estimate(a, b), 4);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 5);
        // 3 diagonals plus 1 straight step.
        assert_eq!(Heuristic::Octile.estimate(a, b), 3 * 14 + 10);
    }

    #[test]
    fn every_heuristic_is_admissible() {
        // True remaining cost over open ground is the octile distance;
        // no estimate may exceed it.
        let a = Point::new(0, 0);
        for x in -6..=6 {
            for y in -6..=6 {
                let b = Point::new(x, y);
                let truth = octile(a, b);
                for h in [
                    Heuristic::Manhattan,
                    Heuristic::Chebyshev,
                    Heuristic::Euclidean,
                    Heuristic::Octile,
                ] {
                    assert!(h.estimate(a, b) <= truth, "{h:?} overestimates at {b}");
                }
            }
        }
    }

    #[test]
    fn estimates_are_symmetric() {
        let a = Point::new(-2, 5);
        let b = Point::new(3, 1);
        for h in [
            Heuristic::Manhattan,
            Heuristic::Chebyshev,
            Heuristic::Euclidean,
            Heuristic::Octile,
        ] {
            assert_eq!(h.estimate(a, b), h.estimate(b, a));
        }
    }
}
