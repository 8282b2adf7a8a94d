use pathviz_core::{Grid, Point};

use crate::path::reconstruct_path;

/// A grid search strategy.
///
/// `search` mutates the transient fields of `grid` (distance, visited,
/// previous) and returns the visitation trace. Afterwards `reconstruct`
/// reads the backpointers left behind to produce the start → finish path.
/// Each call expects a freshly reset snapshot.
pub trait Search {
    /// Short identifier, e.g. `"bfs"`.
    fn name(&self) -> &'static str;

    /// Run the search and return the cells in the order they were visited.
    fn search(&self, grid: &mut Grid, start: Point, finish: Point) -> Vec<Point>;

    /// Walk the backpointers from `finish` after [`search`](Self::search).
    fn reconstruct(&self, grid: &Grid, finish: Point) -> Vec<Point> {
        reconstruct_path(grid, finish)
    }
}
