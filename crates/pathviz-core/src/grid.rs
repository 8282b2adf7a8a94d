//! The [`Grid`] type — a search snapshot of [`Cell`]s.
//!
//! A `Grid` owns its cells in row-major order. The caller owns the snapshot
//! and lends it mutably to exactly one search at a time.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::geom::{Point, Range, RangeIter};
use crate::layout;

/// A rectangular grid of [`Cell`]s with fixed width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with open cells.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a `Point` to a row-major index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    /// Convert a row-major index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.bounds.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(|i| &mut self.cells[i])
    }

    /// Mark or clear a wall at `p`. Start and finish cells never become
    /// walls; out-of-bounds points are ignored.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if let Some(c) = self.at_mut(p) {
            if !(c.is_start || c.is_finish) {
                c.is_wall = wall;
            }
        }
    }

    /// Make `p` the start cell. The previous start loses its flag and a wall
    /// at `p` is cleared. No-op if `p` is out of bounds.
    pub fn set_start(&mut self, p: Point) {
        if !self.contains(p) {
            return;
        }
        for c in self.cells.iter_mut() {
            c.is_start = false;
        }
        let c = &mut self[p];
        c.is_start = true;
        c.is_wall = false;
    }

    /// Make `p` the finish cell. The previous finish loses its flag and a
    /// wall at `p` is cleared. No-op if `p` is out of bounds.
    pub fn set_finish(&mut self, p: Point) {
        if !self.contains(p) {
            return;
        }
        for c in self.cells.iter_mut() {
            c.is_finish = false;
        }
        let c = &mut self[p];
        c.is_finish = true;
        c.is_wall = false;
    }

    /// Position of the start cell, if any.
    pub fn start(&self) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| c.is_start)
            .map(|i| self.point(i))
    }

    /// Position of the finish cell, if any.
    pub fn finish(&self) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| c.is_finish)
            .map(|i| self.point(i))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// Append the in-bounds orthogonal neighbours of `p` into `buf`, in the
    /// order up, down, left, right. Walls are included. The caller clears
    /// `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Clear every cell's transient search fields so the snapshot can serve
    /// another search.
    pub fn reset_search(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_search();
        }
    }

    /// Row-major iterator over every point of the grid.
    #[inline]
    pub fn points(&self) -> RangeIter {
        self.bounds.iter()
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.points().zip(self.cells.iter())
    }
}

impl Index<Point> for Grid {
    type Output = Cell;

    /// Panics if `p` is out of bounds.
    #[inline]
    fn index(&self, p: Point) -> &Cell {
        match self.idx(p) {
            Some(i) => &self.cells[i],
            None => panic!("point {p} outside grid {}", self.bounds),
        }
    }
}

impl IndexMut<Point> for Grid {
    #[inline]
    fn index_mut(&mut self, p: Point) -> &mut Cell {
        match self.idx(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("point {p} outside grid {}", self.bounds),
        }
    }
}

/// Renders the static layout (walls and endpoints) in the [`Layout`]
/// alphabet, one line per row.
///
/// [`Layout`]: crate::layout::Layout
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let c = &self[Point::new(x, y)];
                let ch = if c.is_start {
                    layout::START
                } else if c.is_finish {
                    layout::FINISH
                } else if c.is_wall {
                    layout::WALL
                } else {
                    layout::OPEN
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_neighbors(g: &Grid, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        g.neighbors(p, &mut buf);
        buf
    }

    #[test]
    fn grid_new_and_at() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert_eq!(g.at(Point::new(0, 0)), Some(&Cell::default()));
        assert_eq!(g.at(Point::new(4, 0)), None);
    }

    #[test]
    fn index_round_trips() {
        let g = Grid::new(5, 3);
        for (i, p) in g.points().enumerate() {
            assert_eq!(g.idx(p), Some(i));
            assert_eq!(g.point(i), p);
        }
    }

    #[test]
    fn neighbors_interior_order() {
        let g = Grid::new(3, 3);
        assert_eq!(
            collect_neighbors(&g, Point::new(1, 1)),
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn neighbors_omit_out_of_bounds() {
        let g = Grid::new(3, 3);
        assert_eq!(
            collect_neighbors(&g, Point::new(0, 0)),
            vec![Point::new(0, 1), Point::new(1, 0)]
        );
        assert_eq!(
            collect_neighbors(&g, Point::new(2, 2)),
            vec![Point::new(2, 1), Point::new(1, 2)]
        );
        let line = Grid::new(1, 1);
        assert!(collect_neighbors(&line, Point::new(0, 0)).is_empty());
    }

    #[test]
    fn neighbors_include_walls() {
        let mut g = Grid::new(3, 1);
        g.set_wall(Point::new(1, 0), true);
        assert_eq!(collect_neighbors(&g, Point::new(0, 0)), vec![Point::new(1, 0)]);
    }

    #[test]
    fn start_and_finish_are_unique_and_clear_walls() {
        let mut g = Grid::new(4, 4);
        g.set_wall(Point::new(2, 2), true);
        g.set_start(Point::new(0, 0));
        g.set_start(Point::new(2, 2));
        assert_eq!(g.start(), Some(Point::new(2, 2)));
        assert!(!g[Point::new(2, 2)].is_wall);
        assert!(!g[Point::new(0, 0)].is_start);

        g.set_finish(Point::new(3, 3));
        g.set_wall(Point::new(3, 3), true);
        assert!(!g[Point::new(3, 3)].is_wall);
        assert_eq!(g.finish(), Some(Point::new(3, 3)));
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn reset_search_clears_transient_state() {
        let mut g = Grid::new(2, 2);
        g.set_wall(Point::new(1, 1), true);
        g[Point::new(0, 0)].distance = 0.0;
        g[Point::new(0, 0)].visited = true;
        g[Point::new(1, 0)].previous = Some(Point::new(0, 0));
        g.reset_search();
        for (_, c) in g.iter() {
            assert!(!c.visited);
            assert!(c.previous.is_none());
            assert!(c.distance.is_infinite());
        }
        assert!(g[Point::new(1, 1)].is_wall);
    }

    #[test]
    fn display_renders_layout() {
        let mut g = Grid::new(3, 2);
        g.set_start(Point::new(0, 0));
        g.set_finish(Point::new(2, 1));
        g.set_wall(Point::new(1, 0), true);
        assert_eq!(g.to_string(), "S#.\n..F");
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let g = Grid::new(2, 2);
        let _ = &g[Point::new(2, 0)];
    }
}
