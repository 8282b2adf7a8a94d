use pathviz_core::{Grid, Point};

use crate::distance::euclidean;
use crate::traits::Search;

/// Greedy best-first search guided by straight-line distance to the finish.
///
/// All cells sit in one list that is stably re-sorted by `distance` every
/// round; the front cell is taken. Walls are dropped without being marked
/// visited, an infinite front distance ends the search, and otherwise the
/// cell is visited and appended to the trace. Every unvisited neighbour,
/// walls included, then gets its distance overwritten with its Euclidean
/// distance to the finish and its backpointer set to the current cell.
///
/// The overwrite is unconditional, so the path is not guaranteed shortest.
pub fn greedy_best_first(grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
    let mut trace = Vec::new();
    if !grid.contains(start) {
        return trace;
    }
    grid[start].distance = 0.0;

    let mut unvisited: Vec<Point> = grid.points().collect();
    let mut nbuf = Vec::with_capacity(4);

    while !unvisited.is_empty() {
        unvisited.sort_by(|a, b| grid[*a].distance.total_cmp(&grid[*b].distance));
        let closest = unvisited.remove(0);
        let cell = &grid[closest];
        if cell.is_wall {
            continue;
        }
        // Trapped: nothing left with a finite estimate.
        if !cell.is_reached() {
            break;
        }
        grid[closest].visited = true;
        trace.push(closest);
        log::trace!("greedy: visited {closest} at {:.3}", grid[closest].distance);
        if closest == finish {
            break;
        }

        nbuf.clear();
        grid.neighbors(closest, &mut nbuf);
        for &np in nbuf.iter() {
            let n = &mut grid[np];
            if n.visited {
                continue;
            }
            n.distance = euclidean(np, finish);
            n.previous = Some(closest);
        }
    }

    log::debug!(
        "greedy: visited {} cells, finish reached: {}",
        trace.len(),
        trace.last() == Some(&finish)
    );
    trace
}

/// [`Search`] adapter for [`greedy_best_first`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyBestFirst;

impl Search for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn search(&self, grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
        greedy_best_first(grid, start, finish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{path_found, reconstruct_path};
    use crate::testutil::{assert_valid_path, layout};

    #[test]
    fn heads_straight_for_the_finish() {
        let mut g = Grid::new(10, 3);
        let (s, f) = (Point::new(0, 1), Point::new(9, 1));
        let trace = greedy_best_first(&mut g, s, f);
        // Nothing but the straight line gets visited on an open grid.
        let line: Vec<Point> = (0..10).map(|x| Point::new(x, 1)).collect();
        assert_eq!(trace, line);
        assert_eq!(reconstruct_path(&g, f), line);
    }

    #[test]
    fn walls_get_estimates_but_are_never_visited() {
        let (mut g, s, f) = layout(
            "
S#.
...
..F",
        );
        let wall = Point::new(1, 0);
        let trace = greedy_best_first(&mut g, s, f);
        assert!(!trace.contains(&wall));
        assert!(!g[wall].visited);
        assert!(g[wall].previous.is_some());
        assert_eq!(g[wall].distance, euclidean(wall, f));
        let path = reconstruct_path(&g, f);
        assert_valid_path(&g, &path, s, f);
    }

    #[test]
    fn estimates_overwrite_unconditionally() {
        let mut g = Grid::new(3, 3);
        let (s, f) = (Point::new(0, 0), Point::new(2, 2));
        greedy_best_first(&mut g, s, f);
        // A plain estimate, not the path cost of 2.
        let mid = Point::new(1, 1);
        assert_eq!(g[mid].distance, euclidean(mid, f));
        assert_ne!(g[mid].distance, 2.0);
    }

    #[test]
    fn finds_a_connected_path_through_a_maze() {
        let (mut g, s, f) = layout(
            "
S...#....
.##.#.##.
.#..#..#.
.#.###.#.
.#.....#F",
        );
        let trace = greedy_best_first(&mut g, s, f);
        assert_eq!(trace.last(), Some(&f));
        let path = reconstruct_path(&g, f);
        assert!(path_found(&path, s));
        assert_valid_path(&g, &path, s, f);
    }

    #[test]
    fn trapped_start_returns_only_start() {
        let (mut g, s, f) = layout(
            "
.#...
#S#..
.#..F",
        );
        let trace = greedy_best_first(&mut g, s, f);
        assert_eq!(trace, vec![s]);
        assert_eq!(reconstruct_path(&g, f), vec![f]);
    }
}
