//! **octile-term** — terminal rendering of field maps and paths.
//!
//! Draws a [`FieldMap`] row by row through crossterm's queued commands, with
//! an optional path overlay. All output goes through a generic writer, so
//! callers can render to stdout or capture into a buffer.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use octile_core::Point;
use octile_field::FieldMap;
use octile_paths::Path;

/// Draw a field, optionally overlaying a path.
///
/// Path cells print as a yellow `o`, obstacles as a white `#`, and open
/// ground as a blank. The `s`/`f` markers print in green where the overlay
/// does not cover them; a found path includes both endpoints, so the markers
/// show only when rendering without a path. Commands are queued and flushed
/// once at the end.
pub fn render<W: Write>(out: &mut W, field: &FieldMap, path: Option<&Path>) -> io::Result<()> {
    let on_path: HashSet<Point> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();

    for y in 0..field.height() {
        for x in 0..field.width() {
            let p = Point::new(x, y);
            if on_path.contains(&p) {
                queue!(
                    out,
                    SetForegroundColor(Color::Yellow),
                    Print('o'),
                    ResetColor
                )?;
            } else if p == field.start() {
                queue!(out, SetForegroundColor(Color::Green), Print('s'), ResetColor)?;
            } else if p == field.goal() {
                queue!(out, SetForegroundColor(Color::Green), Print('f'), ResetColor)?;
            } else if field.grid().is_passable(p) {
                queue!(out, Print(' '))?;
            } else {
                queue!(out, SetForegroundColor(Color::White), Print('#'), ResetColor)?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use octile_paths::{OctileCost, SearchOutcome, search};

    const FIELD: &str = "\
3 4
s..#
.##.
..f.";

    #[test]
    fn bare_field_has_markers_and_walls() {
        let field = FieldMap::parse(FIELD).unwrap();
        let mut buf = Vec::new();
        render(&mut buf, &field, None).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains('s'));
        assert!(out.contains('f'));
        assert!(out.contains('#'));
        assert!(!out.contains('o'));
    }

    #[test]
    fn path_overlay_covers_the_markers() {
        let field = FieldMap::parse(FIELD).unwrap();
        let model = OctileCost::new();
        let outcome = search(field.grid(), &model, field.start(), field.goal());
        let SearchOutcome::Found(path) = outcome else {
            panic!("field is connected");
        };
        let mut buf = Vec::new();
        render(&mut buf, &field, Some(&path)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.matches('o').count(), path.len());
        assert!(!out.contains('s'));
        assert!(!out.contains('f'));
    }
}
