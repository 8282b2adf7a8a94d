//! The [`Cell`] type — one node of the search grid.

use crate::geom::Point;

/// A grid node: static flags set by the editor plus transient search state.
///
/// `distance`, `visited` and `previous` are written by a search pass and are
/// only meaningful until the snapshot is reset.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub is_start: bool,
    pub is_finish: bool,
    pub is_wall: bool,
    /// Tentative cost from the start, a heuristic estimate (greedy search)
    /// or the level (breadth-first search). `f64::INFINITY` when unreached.
    #[cfg_attr(feature = "serde", serde(skip, default = "unreached"))]
    pub distance: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub visited: bool,
    /// Backpointer toward the start.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub previous: Option<Point>,
}

#[cfg(feature = "serde")]
fn unreached() -> f64 {
    f64::INFINITY
}

impl Cell {
    /// An open cell.
    pub const OPEN: Self = Self {
        is_start: false,
        is_finish: false,
        is_wall: false,
        distance: f64::INFINITY,
        visited: false,
        previous: None,
    };

    /// A wall cell.
    pub const WALL: Self = Self {
        is_wall: true,
        ..Self::OPEN
    };

    /// Whether the cell has been reached with a finite distance.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }

    /// Clear the transient search fields, keeping the static flags.
    #[inline]
    pub fn reset_search(&mut self) {
        self.distance = f64::INFINITY;
        self.visited = false;
        self.previous = None;
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unreached_open_cell() {
        let c = Cell::default();
        assert!(!c.is_wall && !c.is_start && !c.is_finish);
        assert!(c.distance.is_infinite());
        assert!(!c.visited);
        assert_eq!(c.previous, None);
        assert!(!c.is_reached());
    }

    #[test]
    fn reset_keeps_static_flags() {
        let mut c = Cell::WALL;
        c.distance = 3.0;
        c.visited = true;
        c.previous = Some(Point::new(1, 1));
        c.reset_search();
        assert!(c.is_wall);
        assert_eq!(c, Cell::WALL);
    }
}
