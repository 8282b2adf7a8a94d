use std::collections::BinaryHeap;

use pathviz_core::{Grid, Point};

use crate::traits::Search;

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first, and among equal costs the earliest pushed.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    pos: Point,
    cost: u32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform-cost search ("Dijkstra") with unit edge weights.
///
/// Every cell starts at infinite distance and the start at 0. The cheapest
/// unvisited cell is settled each round: walls are skipped, anything else
/// is marked visited and appended to the trace, and the search stops at the
/// finish. Unvisited non-wall neighbours are relaxed on strict improvement.
/// When only unreachable cells remain the trace so far is returned.
pub fn uniform_cost(grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
    let mut trace = Vec::new();
    for p in grid.points() {
        grid[p].distance = f64::INFINITY;
    }
    if !grid.contains(start) {
        return trace;
    }
    grid[start].distance = 0.0;

    let mut seq = 0u64;
    let mut open = BinaryHeap::new();
    open.push(NodeRef {
        pos: start,
        cost: 0,
        seq,
    });

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cp = current.pos;
        let cell = &grid[cp];
        // Skip stale entries.
        if cell.visited || f64::from(current.cost) > cell.distance {
            continue;
        }
        if cell.is_wall {
            continue;
        }
        grid[cp].visited = true;
        trace.push(cp);
        log::trace!("uniform-cost: settled {cp} at {}", current.cost);
        if cp == finish {
            break;
        }

        let tentative = current.cost + 1;
        nbuf.clear();
        grid.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let n = &mut grid[np];
            if n.visited || n.is_wall {
                continue;
            }
            if f64::from(tentative) < n.distance {
                n.distance = f64::from(tentative);
                n.previous = Some(cp);
                seq += 1;
                open.push(NodeRef {
                    pos: np,
                    cost: tentative,
                    seq,
                });
            }
        }
    }

    log::debug!(
        "uniform-cost: visited {} cells, finish reached: {}",
        trace.len(),
        trace.last() == Some(&finish)
    );
    trace
}

/// [`Search`] adapter for [`uniform_cost`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCost;

impl Search for UniformCost {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn search(&self, grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
        uniform_cost(grid, start, finish)
    }
}
