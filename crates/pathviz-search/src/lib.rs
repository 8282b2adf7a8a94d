//! Grid search algorithms for the pathviz visualizer.
//!
//! Four interchangeable strategies explore a [`pathviz_core::Grid`] from a
//! start cell toward a finish cell, 4-directionally and with unit steps:
//!
//! - **Uniform-cost search** ([`uniform_cost`], "Dijkstra")
//! - **Greedy best-first search** ([`greedy_best_first`])
//! - **Breadth-first search** ([`breadth_first`])
//! - **Relaxation-based search** ([`bellman_ford`], "Bellman-Ford")
//!
//! Each one writes distance, visited and backpointer state into the grid
//! and returns the visitation trace. [`reconstruct_path`] then walks the
//! backpointers from the finish. An unreachable finish is not an error: the
//! path is just `[finish]`, which [`path_found`] reports as no path.
//!
//! [`Algorithm`] selects a strategy at runtime and bundles both outputs in a
//! [`SearchResult`]; [`Timeline`] turns a result into a reveal schedule.
//!
//! | Function | Visits | Path |
//! |---|---|---|
//! | [`uniform_cost`] | until the finish is settled | shortest |
//! | [`greedy_best_first`] | until the finish is taken | any |
//! | [`breadth_first`] | until the finish is dequeued | shortest |
//! | [`bellman_ford`] | every reachable cell | shortest |

mod algorithm;
mod bellman_ford;
mod bfs;
mod dijkstra;
mod distance;
mod greedy;
mod path;
mod playback;
mod traits;

#[cfg(test)]
mod testutil;

pub use algorithm::{Algorithm, AlgorithmParseError, SearchResult};
pub use bellman_ford::{BellmanFord, BellmanFordOutcome, bellman_ford, bellman_ford_checked};
pub use bfs::{BreadthFirst, breadth_first};
pub use dijkstra::{UniformCost, uniform_cost};
pub use distance::{euclidean, manhattan};
pub use greedy::{GreedyBestFirst, greedy_best_first};
pub use path::{path_found, reconstruct_path};
pub use playback::{PlaybackConfig, Step, StepKind, Timeline};
pub use traits::Search;


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathviz_core::{Grid, Point};

    #[test]
    fn algorithm_uses_short_names() {
        assert_eq!(
            serde_json::to_string(&Algorithm::BellmanFord).unwrap(),
            r#""bellman-ford""#
        );
        let back: Algorithm = serde_json::from_str(r#""greedy""#).unwrap();
        assert_eq!(back, Algorithm::GreedyBestFirst);
    }

    #[test]
    fn search_result_round_trip() {
        let mut g = Grid::new(4, 2);
        let r = Algorithm::BreadthFirst.run(&mut g, Point::new(0, 0), Point::new(3, 1));
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
