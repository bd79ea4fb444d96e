//! A 2D passability map.
//!
//! [`Grid`] stores one [`Tile`] per cell in a flat row-major buffer. It is
//! built once by a map loader (or test fixture) and then only borrowed
//! immutably by searches, so passability can never change mid-search.

use crate::geom::Point;

/// A single map cell: open ground or an impassable obstacle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Traversable ground.
    #[default]
    Open,
    /// An obstacle no move may enter.
    Blocked,
}

/// A fixed-size 2D passability map.
///
/// All queries taking a [`Point`] answer `false` (never panic) for
/// out-of-bounds coordinates, so callers may probe neighbors freely
/// without a separate bounds check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid of the given size with every tile [`Tile::Open`].
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        // Multiply as usize: the cell count of a near-i32::MAX square
        // does not fit in i32.
        Self {
            width,
            height,
            tiles: vec![Tile::default(); width as usize * height as usize],
        }
    }

    /// Create a grid by evaluating `f` at every cell, row by row.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> Tile) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..grid.height {
            for x in 0..grid.width {
                let p = Point::new(x, y);
                let idx = grid.index(p);
                grid.tiles[idx] = f(p);
            }
        }
        grid
    }

    /// Width of the grid in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid extents.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is inside the grid and open. Out-of-bounds coordinates
    /// are never passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.tiles[self.index(p)] == Tile::Open
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.in_bounds(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx] = tile;
    }

    // Callers check bounds first, so both components are non-negative.
    #[inline]
    fn index(&self, p: Point) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_open() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert!(g.is_passable(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn out_of_bounds_is_not_passable() {
        let g = Grid::new(4, 3);
        assert!(!g.in_bounds(Point::new(-1, 0)));
        assert!(!g.in_bounds(Point::new(0, -1)));
        assert!(!g.in_bounds(Point::new(4, 0)));
        assert!(!g.in_bounds(Point::new(0, 3)));
        assert!(!g.is_passable(Point::new(-1, 0)));
        assert!(!g.is_passable(Point::new(4, 2)));
        assert_eq!(g.tile(Point::new(4, 0)), None);
    }

    #[test]
    fn set_and_query_tiles() {
        let mut g = Grid::new(3, 3);
        g.set(Point::new(1, 1), Tile::Blocked);
        assert!(!g.is_passable(Point::new(1, 1)));
        assert_eq!(g.tile(Point::new(1, 1)), Some(Tile::Blocked));
        assert!(g.is_passable(Point::new(0, 1)));
        // Out-of-bounds set is a no-op.
        g.set(Point::new(9, 9), Tile::Blocked);
        assert_eq!(g, {
            let mut expect = Grid::new(3, 3);
            expect.set(Point::new(1, 1), Tile::Blocked);
            expect
        });
    }

    #[test]
    fn from_fn_fills_row_major() {
        let g = Grid::from_fn(3, 2, |p| {
            if p.x == p.y {
                Tile::Blocked
            } else {
                Tile::Open
            }
        });
        assert!(!g.is_passable(Point::new(0, 0)));
        assert!(!g.is_passable(Point::new(1, 1)));
        assert!(g.is_passable(Point::new(2, 1)));
    }

    #[test]
    fn negative_dimensions_clamp_to_empty() {
        let g = Grid::new(-2, 5);
        assert_eq!(g.width(), 0);
        assert!(!g.in_bounds(Point::ZERO));
    }
}
