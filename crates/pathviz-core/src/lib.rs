//! **pathviz-core** — grid model for the pathviz search visualizer.
//!
//! This crate provides the types shared by every search: geometry
//! primitives, the [`Cell`] node record, the [`Grid`] search snapshot with
//! its 4-directional adjacency, ASCII [`Layout`]s, and the editor-side
//! [`Board`] that hands out fresh snapshots.

pub mod board;
pub mod cell;
pub mod geom;
pub mod grid;
pub mod layout;

pub use board::{Board, BoardConfig, BoardError};
pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use layout::{Layout, LayoutError};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn board_config_round_trip() {
        let c = BoardConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn cell_skips_search_state() {
        let mut c = Cell::WALL;
        c.distance = 4.0;
        c.visited = true;
        c.previous = Some(Point::new(1, 2));
        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("distance"));
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Cell::WALL);
    }
}
