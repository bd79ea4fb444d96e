//! **octile-core** — Grid geometry and passability maps.
//!
//! This crate provides the foundational types used across the *octile*
//! ecosystem: the [`Point`] coordinate type and the binary-passability
//! [`Grid`] that searches and map loaders share.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Grid, Tile};
