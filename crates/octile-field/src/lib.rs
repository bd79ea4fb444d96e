//! **octile-field** — ASCII field maps.
//!
//! A field is a dimensions header (`height width`) followed by one symbol
//! per cell in row-major order: `.` open ground, `#` an obstacle, `s` the
//! start cell, `f` the goal cell (both open). Whitespace between symbols
//! only separates them, so maps may be laid out one row per line or packed
//! arbitrarily.
//!
//! ```text
//! 3 5
//! s...#
//! .##..
//! ...f.
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use octile_core::{Grid, Point, Tile};

/// Upper bound on each field dimension; keeps cell counts sane.
pub const MAX_DIM: i32 = 4096;

/// A parsed field: the passability grid plus its marked endpoints.
#[derive(Clone, Debug)]
pub struct FieldMap {
    grid: Grid,
    start: Point,
    goal: Point,
}

impl FieldMap {
    /// Parse a field from its textual form.
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        let mut tokens = input.split_whitespace();
        let height = parse_dimension(tokens.next())?;
        let width = parse_dimension(tokens.next())?;

        // Everything after the header is cell symbols. Symbols past the
        // expected count are ignored.
        let mut symbols = tokens.flat_map(str::chars);

        let expected = (height as usize) * (width as usize);
        let mut grid = Grid::new(width, height);
        let mut start = None;
        let mut goal = None;
        let mut found = 0usize;
        for y in 0..height {
            for x in 0..width {
                let Some(ch) = symbols.next() else {
                    return Err(FieldError::Truncated { expected, found });
                };
                found += 1;
                let p = Point::new(x, y);
                match ch {
                    '.' => {}
                    '#' => grid.set(p, Tile::Blocked),
                    's' => match start {
                        None => start = Some(p),
                        Some(_) => return Err(FieldError::DuplicateStart(p)),
                    },
                    'f' => match goal {
                        None => goal = Some(p),
                        Some(_) => return Err(FieldError::DuplicateGoal(p)),
                    },
                    _ => return Err(FieldError::UnknownSymbol { ch, pos: p }),
                }
            }
        }
        let start = start.ok_or(FieldError::MissingStart)?;
        let goal = goal.ok_or(FieldError::MissingGoal)?;
        Ok(Self { grid, start, goal })
    }

    /// Read and parse a field file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FieldError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The passability grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cell marked `s`.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The cell marked `f`.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Width of the field in cells.
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Height of the field in cells.
    pub fn height(&self) -> i32 {
        self.grid.height()
    }
}

fn parse_dimension(token: Option<&str>) -> Result<i32, FieldError> {
    let token = token.ok_or(FieldError::MissingDimensions)?;
    match token.parse::<i32>() {
        Ok(n) if n > 0 && n <= MAX_DIM => Ok(n),
        _ => Err(FieldError::BadDimension(token.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from reading or parsing a field map.
#[derive(Debug)]
pub enum FieldError {
    /// The file could not be read.
    Io(io::Error),
    /// The input ended before both dimensions were read.
    MissingDimensions,
    /// A dimension token was not a positive integer within [`MAX_DIM`].
    BadDimension(String),
    /// The body ended after `found` of the `expected` cell symbols.
    Truncated { expected: usize, found: usize },
    /// A character outside the symbol set appeared at `pos`.
    UnknownSymbol { ch: char, pos: Point },
    /// No cell is marked `s`.
    MissingStart,
    /// No cell is marked `f`.
    MissingGoal,
    /// A second `s` marker appeared at the given cell.
    DuplicateStart(Point),
    /// A second `f` marker appeared at the given cell.
    DuplicateGoal(Point),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "field: {err}"),
            Self::MissingDimensions => write!(f, "field: missing height/width header"),
            Self::BadDimension(s) => write!(
                f,
                "field: bad dimension \u{201c}{s}\u{201d}: expected an integer in 1..={MAX_DIM}"
            ),
            Self::Truncated { expected, found } => {
                write!(f, "field: expected {expected} cell symbols, found {found}")
            }
            Self::UnknownSymbol { ch, pos } => write!(
                f,
                "field contains unknown symbol \u{201c}{ch}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
            Self::MissingStart => write!(f, "field: no start cell (s)"),
            Self::MissingGoal => write!(f, "field: no goal cell (f)"),
            Self::DuplicateStart(p) => write!(f, "field: second start cell at ({}, {})", p.x, p.y),
            Self::DuplicateGoal(p) => write!(f, "field: second goal cell at ({}, {})", p.x, p.y),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FieldError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
