use pathviz_core::{Grid, Point};

use crate::traits::Search;

/// Result of [`bellman_ford_checked`].
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordOutcome {
    /// Non-wall cells in the order they were first reached.
    pub trace: Vec<Point>,
    /// Relaxation rounds actually run (at most `V - 1`).
    pub rounds: usize,
    /// `false` when an edge could still be relaxed after the last round,
    /// meaning no shortest-path tree exists.
    pub consistent: bool,
}

/// Relaxation-based search ("Bellman-Ford"), returning only the trace.
///
/// See [`bellman_ford_checked`].
pub fn bellman_ford(grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
    bellman_ford_checked(grid, start, finish).trace
}

/// Relaxation-based search ("Bellman-Ford").
///
/// The start gets distance 0, every other cell infinity and no backpointer.
/// Up to `V - 1` rounds then sweep the non-wall cells in row-major order;
/// a cell joins the trace the first time a sweep meets it with a finite
/// distance, and relaxes each unvisited neighbour with unit cost on strict
/// improvement. A round without any relaxation ends the sweeps, since no
/// later round could change anything. One final pass checks that no edge
/// still relaxes; if one does the outcome is flagged inconsistent and the
/// grid is left as it is.
///
/// The whole reachable area is explored; `finish` does not stop the sweeps.
pub fn bellman_ford_checked(grid: &mut Grid, start: Point, finish: Point) -> BellmanFordOutcome {
    for p in grid.points() {
        let c = &mut grid[p];
        c.distance = if p == start { 0.0 } else { f64::INFINITY };
        c.previous = None;
    }

    let mut trace = Vec::new();
    let mut seen = vec![false; grid.len()];
    let max_rounds = grid.len().saturating_sub(1);
    let mut rounds = 0;
    let mut nbuf = Vec::with_capacity(4);

    while rounds < max_rounds {
        rounds += 1;
        let mut relaxed = false;
        for (i, p) in grid.points().enumerate() {
            let cell = &grid[p];
            // Unreached cells cannot improve anything: inf + 1 is inf.
            if cell.is_wall || !cell.is_reached() {
                continue;
            }
            let candidate = cell.distance + 1.0;
            if !seen[i] {
                seen[i] = true;
                trace.push(p);
            }

            nbuf.clear();
            grid.neighbors(p, &mut nbuf);
            for &np in nbuf.iter() {
                let n = &mut grid[np];
                if n.visited {
                    continue;
                }
                if candidate < n.distance {
                    n.distance = candidate;
                    n.previous = Some(p);
                    relaxed = true;
                }
            }
        }
        log::trace!("bellman-ford: round {rounds}, relaxed: {relaxed}");
        if !relaxed {
            break;
        }
    }

    conclude(grid, finish, trace, rounds, &mut nbuf)
}

/// Run the consistency check over the finished sweeps and package the
/// outcome. Only reads the grid; the trace is passed through as is.
fn conclude(
    grid: &Grid,
    finish: Point,
    trace: Vec<Point>,
    rounds: usize,
    nbuf: &mut Vec<Point>,
) -> BellmanFordOutcome {
    let consistent = !has_relaxable_edge(grid, nbuf);
    if !consistent {
        log::debug!("bellman-ford: edges still relax after {rounds} rounds, no shortest path");
    }
    log::debug!(
        "bellman-ford: {} cells reached in {rounds} rounds, finish reached: {}",
        trace.len(),
        grid.at(finish).is_some_and(|c| c.is_reached())
    );
    BellmanFordOutcome {
        trace,
        rounds,
        consistent,
    }
}

/// Whether any edge out of a non-wall cell could still lower a neighbour's
/// distance.
///
/// Walls are skipped as sources, as in the sweeps. A wall can hold a finite
/// distance after being relaxed into, but nothing ever relaxes out of it, so
/// it never makes the outcome inconsistent.
fn has_relaxable_edge(grid: &Grid, nbuf: &mut Vec<Point>) -> bool {
    for p in grid.points() {
        let cell = &grid[p];
        if cell.is_wall {
            continue;
        }
        let candidate = cell.distance + 1.0;
        nbuf.clear();
        grid.neighbors(p, nbuf);
        if nbuf
            .iter()
            .any(|&np| !grid[np].visited && candidate < grid[np].distance)
        {
            return true;
        }
    }
    false
}

/// [`Search`] adapter for [`bellman_ford`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BellmanFord;

impl Search for BellmanFord {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    fn search(&self, grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
        bellman_ford(grid, start, finish)
    }
}
