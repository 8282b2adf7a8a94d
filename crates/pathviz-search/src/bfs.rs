use std::collections::VecDeque;

use pathviz_core::{Grid, Point};

use crate::traits::Search;

/// Breadth-first search with a strict FIFO queue.
///
/// The start is marked visited at level 0 and enqueued. Each dequeued cell
/// is appended to the trace and expanded: unvisited non-wall neighbours are
/// marked visited, pointed back at the current cell, given the next level
/// (stored in `distance`) and enqueued. Reaching the finish still expands
/// it once before returning. Wall cells never appear in the trace.
pub fn breadth_first(grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
    let mut trace = Vec::new();
    if !grid.contains(start) {
        return trace;
    }
    {
        let s = &mut grid[start];
        s.distance = 0.0;
        s.previous = None;
        s.visited = true;
    }

    let mut queue = VecDeque::from([start]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cp) = queue.pop_front() {
        trace.push(cp);
        let level = grid[cp].distance;

        nbuf.clear();
        grid.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let n = &mut grid[np];
            if n.visited || n.is_wall {
                continue;
            }
            n.visited = true;
            n.previous = Some(cp);
            n.distance = level + 1.0;
            queue.push_back(np);
        }

        if cp == finish {
            break;
        }
    }

    trace.retain(|&p| !grid[p].is_wall);
    log::debug!(
        "bfs: visited {} cells, finish reached: {}",
        trace.len(),
        trace.last() == Some(&finish)
    );
    trace
}

/// [`Search`] adapter for [`breadth_first`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirst;

impl Search for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search(&self, grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
        breadth_first(grid, start, finish)
    }
}
