use pathviz_core::{Grid, Point};

/// Walk `previous` pointers from `finish` back to a cell without one and
/// return the cells in start → finish order.
///
/// If the search never reached `finish` the result is just `[finish]`; use
/// [`path_found`] to tell that apart from a real path.
pub fn reconstruct_path(grid: &Grid, finish: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(finish);
    while let Some(p) = cur {
        // Backpointers form a tree, so a chain never exceeds the cell count.
        if path.len() > grid.len() {
            log::warn!("backpointer chain from {finish} exceeds grid size");
            break;
        }
        path.push(p);
        cur = grid.at(p).and_then(|c| c.previous);
    }
    path.reverse();
    path
}

/// Whether a reconstructed path actually connects `start` to its last cell.
pub fn path_found(path: &[Point], start: Point) -> bool {
    path.first() == Some(&start)
}
