//! Helpers shared by the algorithm tests.

use pathviz_core::{Grid, Layout, Point};

/// Parse a layout picture into a fresh grid plus its endpoints.
pub(crate) fn layout(text: &str) -> (Grid, Point, Point) {
    let l = Layout::parse(text).unwrap();
    (l.grid(), l.start(), l.finish())
}

/// A start → finish path over open, 4-adjacent cells.
pub(crate) fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, finish: Point) {
    assert_eq!(path.first(), Some(&start), "path {path:?} does not begin at start");
    assert_eq!(path.last(), Some(&finish), "path {path:?} does not end at finish");
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} and {} are not adjacent", w[0], w[1]);
    }
    for &p in path {
        assert!(!grid[p].is_wall, "path crosses wall at {p}");
    }
}
