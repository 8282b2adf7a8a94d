//! The editor-side [`Board`]: wall layout and endpoints between searches.
//!
//! A board is what the user paints on. Every search gets its own fresh
//! [`Grid`] from [`Board::snapshot`], so transient search state never leaks
//! from one run into the next.

use std::fmt;

use rand::{Rng, RngExt};

use crate::geom::{Point, Range};
use crate::grid::Grid;
use crate::layout::Layout;

/// Board dimensions and initial endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub finish: Point,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 20,
            start: Point::new(5, 10),
            finish: Point::new(45, 10),
        }
    }
}

/// Errors reported by board edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is not positive.
    InvalidSize { width: i32, height: i32 },
    /// The point lies outside the board.
    OutOfBounds(Point),
    /// Start and finish would share a cell.
    SameEndpoints(Point),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "board: invalid size {width}x{height}")
            }
            Self::OutOfBounds(p) => write!(f, "board: {p} is outside the board"),
            Self::SameEndpoints(p) => write!(f, "board: start and finish both at {p}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Wall layout plus start and finish positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bounds: Range,
    walls: Vec<bool>,
    start: Point,
    finish: Point,
}

impl Board {
    /// Create an empty board.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        let BoardConfig {
            width,
            height,
            start,
            finish,
        } = config;
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidSize { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        for p in [start, finish] {
            if !bounds.contains(p) {
                return Err(BoardError::OutOfBounds(p));
            }
        }
        if start == finish {
            return Err(BoardError::SameEndpoints(start));
        }
        Ok(Self {
            bounds,
            walls: vec![false; bounds.len()],
            start,
            finish,
        })
    }

    /// Create a board matching a parsed layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let size = layout.size();
        let bounds = Range::new(0, 0, size.x, size.y);
        let mut board = Self {
            bounds,
            walls: vec![false; bounds.len()],
            start: layout.start(),
            finish: layout.finish(),
        };
        for p in layout.walls() {
            if let Some(i) = board.idx(p) {
                board.walls[i] = true;
            }
        }
        board
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    fn checked_idx(&self, p: Point) -> Result<usize, BoardError> {
        self.idx(p).ok_or(BoardError::OutOfBounds(p))
    }

    /// The board rectangle.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Start position.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Finish position.
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Whether `p` is a wall. Out-of-bounds points are not walls.
    pub fn is_wall(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.walls[i])
    }

    /// Number of walls.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Flip the wall at `p` and return its new state. Endpoints are left
    /// untouched and report `false`.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, BoardError> {
        let i = self.checked_idx(p)?;
        if p == self.start || p == self.finish {
            return Ok(false);
        }
        self.walls[i] = !self.walls[i];
        log::trace!("toggled wall at {p}: {}", self.walls[i]);
        Ok(self.walls[i])
    }

    /// Set or clear the wall at `p`. Endpoints are left untouched.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), BoardError> {
        let i = self.checked_idx(p)?;
        if p != self.start && p != self.finish {
            self.walls[i] = wall;
        }
        Ok(())
    }

    /// Move the start to `p`, clearing any wall there.
    pub fn move_start(&mut self, p: Point) -> Result<(), BoardError> {
        let i = self.checked_idx(p)?;
        if p == self.finish {
            return Err(BoardError::SameEndpoints(p));
        }
        self.walls[i] = false;
        self.start = p;
        Ok(())
    }

    /// Move the finish to `p`, clearing any wall there.
    pub fn move_finish(&mut self, p: Point) -> Result<(), BoardError> {
        let i = self.checked_idx(p)?;
        if p == self.start {
            return Err(BoardError::SameEndpoints(p));
        }
        self.walls[i] = false;
        self.finish = p;
        Ok(())
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.fill(false);
    }

    /// Turn each non-endpoint cell into a wall with probability `density`
    /// (clamped to 0..=1). Existing walls are kept. Returns the wall count.
    pub fn scatter_walls<R: Rng>(&mut self, rng: &mut R, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        for p in self.bounds.iter() {
            if p == self.start || p == self.finish {
                continue;
            }
            if rng.random_bool(density) {
                if let Some(i) = self.idx(p) {
                    self.walls[i] = true;
                }
            }
        }
        let n = self.wall_count();
        log::debug!("scattered walls at density {density}: {n} walls");
        n
    }

    /// Build a fresh search snapshot: walls and endpoints set, every cell at
    /// infinite distance, unvisited, without a backpointer.
    pub fn snapshot(&self) -> Grid {
        let mut g = Grid::new(self.bounds.width(), self.bounds.height());
        for (i, &wall) in self.walls.iter().enumerate() {
            if wall {
                g.set_wall(g.point(i), true);
            }
        }
        g.set_start(self.start);
        g.set_finish(self.finish);
        g
    }
}

impl Default for Board {
    fn default() -> Self {
        let config = BoardConfig::default();
        let bounds = Range::new(0, 0, config.width, config.height);
        Self {
            bounds,
            walls: vec![false; bounds.len()],
            start: config.start,
            finish: config.finish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Board {
        Board::new(BoardConfig {
            width: 5,
            height: 3,
            start: Point::new(0, 1),
            finish: Point::new(4, 1),
        })
        .unwrap()
    }

    #[test]
    fn default_matches_config() {
        let b = Board::default();
        let c = BoardConfig::default();
        assert_eq!(b.bounds(), Range::new(0, 0, 50, 20));
        assert_eq!(b.start(), c.start);
        assert_eq!(b.finish(), c.finish);
        assert_eq!(Board::new(c).unwrap(), b);
    }

    #[test]
    fn new_validates_config() {
        let mut c = BoardConfig::default();
        c.width = 0;
        assert_eq!(
            Board::new(c),
            Err(BoardError::InvalidSize {
                width: 0,
                height: 20
            })
        );
        let mut c = BoardConfig::default();
        c.finish = Point::new(50, 10);
        assert_eq!(Board::new(c), Err(BoardError::OutOfBounds(Point::new(50, 10))));
        let mut c = BoardConfig::default();
        c.finish = c.start;
        assert_eq!(Board::new(c), Err(BoardError::SameEndpoints(c.start)));
    }

    #[test]
    fn toggle_wall_flips_and_skips_endpoints() {
        let mut b = small();
        let p = Point::new(2, 1);
        assert_eq!(b.toggle_wall(p), Ok(true));
        assert!(b.is_wall(p));
        assert_eq!(b.toggle_wall(p), Ok(false));
        assert!(!b.is_wall(p));
        assert_eq!(b.toggle_wall(b.start()), Ok(false));
        assert!(!b.is_wall(b.start()));
        assert_eq!(
            b.toggle_wall(Point::new(9, 9)),
            Err(BoardError::OutOfBounds(Point::new(9, 9)))
        );
    }

    #[test]
    fn moving_endpoints_clears_walls() {
        let mut b = small();
        let p = Point::new(2, 0);
        b.set_wall(p, true).unwrap();
        b.move_start(p).unwrap();
        assert_eq!(b.start(), p);
        assert!(!b.is_wall(p));
        assert_eq!(
            b.move_finish(p),
            Err(BoardError::SameEndpoints(p))
        );
        assert_eq!(
            b.move_start(Point::new(-1, 0)),
            Err(BoardError::OutOfBounds(Point::new(-1, 0)))
        );
    }

    #[test]
    fn snapshot_is_fresh() {
        let mut b = small();
        b.set_wall(Point::new(2, 1), true).unwrap();
        let g = b.snapshot();
        assert_eq!(g.start(), Some(b.start()));
        assert_eq!(g.finish(), Some(b.finish()));
        assert!(g[Point::new(2, 1)].is_wall);
        assert_eq!(g.wall_count(), 1);
        for (_, c) in g.iter() {
            assert!(c.distance.is_infinite());
            assert!(!c.visited);
            assert!(c.previous.is_none());
        }
        assert_eq!(g.to_string(), ".....\nS.#.F\n.....");
    }

    #[test]
    fn clear_walls_resets_layout() {
        let mut b = small();
        b.set_wall(Point::new(1, 1), true).unwrap();
        b.set_wall(Point::new(3, 2), true).unwrap();
        assert_eq!(b.wall_count(), 2);
        b.clear_walls();
        assert_eq!(b.wall_count(), 0);
    }

    #[test]
    fn scatter_walls_spares_endpoints() {
        let mut b = small();
        let mut rng = StdRng::seed_from_u64(42);
        let n = b.scatter_walls(&mut rng, 1.0);
        assert_eq!(n, 13);
        assert!(!b.is_wall(b.start()));
        assert!(!b.is_wall(b.finish()));

        let mut b = small();
        assert_eq!(b.scatter_walls(&mut rng, 0.0), 0);
    }

    #[test]
    fn from_layout_copies_walls() {
        let l = Layout::parse("S#.\n.#F").unwrap();
        let b = Board::from_layout(&l);
        assert_eq!(b.start(), Point::new(0, 0));
        assert_eq!(b.finish(), Point::new(2, 1));
        assert_eq!(b.wall_count(), 2);
        assert_eq!(b.snapshot(), l.grid());
    }
}
