//! Grid layouts written as ASCII text.
//!
//! A [`Layout`] parses a picture such as
//!
//! ```text
//! S..#
//! .#..
//! ...F
//! ```
//!
//! into a validated description of walls and endpoints, and builds fresh
//! [`Grid`] snapshots from it.

use std::fmt;

use crate::geom::Point;
use crate::grid::Grid;

/// Open cell.
pub const OPEN: char = '.';
/// Wall cell.
pub const WALL: char = '#';
/// Start cell.
pub const START: char = 'S';
/// Finish cell.
pub const FINISH: char = 'F';

/// A parsed, validated grid picture with exactly one start and one finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    content: String,
    size: Point,
    start: Point,
    finish: Point,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading and trailing whitespace of the whole text is trimmed; every
    /// line must then have the same width and use only the characters
    /// `.`, `#`, `S` and `F`.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut width: Option<i32> = None;
        let mut start = None;
        let mut finish = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                match ch {
                    OPEN | WALL => {}
                    START => {
                        if start.replace(pos).is_some() {
                            return Err(LayoutError::DuplicateStart(pos));
                        }
                    }
                    FINISH => {
                        if finish.replace(pos).is_some() {
                            return Err(LayoutError::DuplicateFinish(pos));
                        }
                    }
                    _ => return Err(LayoutError::InvalidRune { ch, pos }),
                }
                x += 1;
            }
            match width {
                Some(w) if w != x => {
                    return Err(LayoutError::InconsistentSize { line: y, expected: w, found: x });
                }
                Some(_) => {}
                None => width = Some(x),
            }
            height = y + 1;
        }

        let start = start.ok_or(LayoutError::MissingStart)?;
        let finish = finish.ok_or(LayoutError::MissingFinish)?;
        Ok(Self {
            content: s.to_string(),
            size: Point::new(width.unwrap_or(0), height),
            start,
            finish,
        })
    }

    /// The (width, height) of the layout in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Position of the `S` cell.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the `F` cell.
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// The normalized text of the layout.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Positions of every `#` cell in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.content.lines().enumerate().flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == WALL)
                .map(move |(x, _)| Point::new(x as i32, y as i32))
        })
    }

    /// Build a fresh search snapshot of this layout.
    pub fn grid(&self) -> Grid {
        let mut g = Grid::new(self.size.x, self.size.y);
        for p in self.walls() {
            g.set_wall(p, true);
        }
        g.set_start(self.start);
        g.set_finish(self.finish);
        g
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A line's width differs from the first line's.
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// A character outside the layout alphabet was found.
    InvalidRune { ch: char, pos: Point },
    /// No `S` cell.
    MissingStart,
    /// No `F` cell.
    MissingFinish,
    /// A second `S` cell.
    DuplicateStart(Point),
    /// A second `F` cell.
    DuplicateFinish(Point),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize { line, expected, found } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => write!(
                f,
                "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}"
            ),
            Self::MissingStart => write!(f, "layout has no start cell '{START}'"),
            Self::MissingFinish => write!(f, "layout has no finish cell '{FINISH}'"),
            Self::DuplicateStart(p) => write!(f, "layout has a second start cell at {p}"),
            Self::DuplicateFinish(p) => write!(f, "layout has a second finish cell at {p}"),
        }
    }
}

impl std::error::Error for LayoutError {}
