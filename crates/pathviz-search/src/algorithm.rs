use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, Point};

use crate::bellman_ford::BellmanFord;
use crate::bfs::BreadthFirst;
use crate::dijkstra::UniformCost;
use crate::greedy::GreedyBestFirst;
use crate::path::path_found;
use crate::traits::Search;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra"))]
    UniformCost,
    #[cfg_attr(feature = "serde", serde(rename = "greedy"))]
    GreedyBestFirst,
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "bellman-ford"))]
    BellmanFord,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::UniformCost,
        Algorithm::GreedyBestFirst,
        Algorithm::BreadthFirst,
        Algorithm::BellmanFord,
    ];

    /// The strategy implementing this algorithm.
    pub fn strategy(self) -> &'static dyn Search {
        match self {
            Algorithm::UniformCost => &UniformCost,
            Algorithm::GreedyBestFirst => &GreedyBestFirst,
            Algorithm::BreadthFirst => &BreadthFirst,
            Algorithm::BellmanFord => &BellmanFord,
        }
    }

    /// Short identifier, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        self.strategy().name()
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::UniformCost => "Dijkstra's Algorithm",
            Algorithm::GreedyBestFirst => "Greedy Best-First Search",
            Algorithm::BreadthFirst => "Breadth-First Search",
            Algorithm::BellmanFord => "Bellman-Ford Algorithm",
        }
    }

    /// Whether a found path is guaranteed to have the fewest edges.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::GreedyBestFirst)
    }

    /// Run the search alone; see [`Search::search`].
    pub fn search(self, grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
        self.strategy().search(grid, start, finish)
    }

    /// Run the search and reconstruct the path from `finish`.
    pub fn run(self, grid: &mut Grid, start: Point, finish: Point) -> SearchResult {
        let strategy = self.strategy();
        let trace = strategy.search(grid, start, finish);
        let path = strategy.reconstruct(grid, finish);
        let found = path_found(&path, start);
        log::debug!(
            "{}: trace {} cells, path {}",
            self,
            trace.len(),
            if found {
                format!("{} cells", path.len())
            } else {
                "not found".to_string()
            }
        );
        SearchResult {
            algorithm: self,
            trace,
            path,
            found,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmParseError(pub String);

impl fmt::Display for AlgorithmParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected dijkstra, greedy, bfs or bellman-ford)",
            self.0
        )
    }
}

impl std::error::Error for AlgorithmParseError {}

impl FromStr for Algorithm {
    type Err = AlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform-cost" | "ucs" => Ok(Algorithm::UniformCost),
            "greedy" | "greedy-best-first" | "gbfs" => Ok(Algorithm::GreedyBestFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "bellman-ford" | "bellmanford" | "bf" => Ok(Algorithm::BellmanFord),
            _ => Err(AlgorithmParseError(s.to_string())),
        }
    }
}

/// Both outputs of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Cells in visitation order.
    pub trace: Vec<Point>,
    /// Start → finish cells, or just `[finish]` when `found` is false.
    pub path: Vec<Point>,
    pub found: bool,
}

impl SearchResult {
    /// Number of edges on the path, if one was found.
    pub fn path_edges(&self) -> Option<usize> {
        self.found.then(|| self.path.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dijkstra() {
        assert_eq!(Algorithm::default(), Algorithm::UniformCost);
    }

    #[test]
    fn from_str_accepts_names_and_aliases() {
        for a in Algorithm::ALL {
            assert_eq!(a.as_str().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!(" Uniform-Cost ".parse::<Algorithm>(), Ok(Algorithm::UniformCost));
        assert_eq!("gbfs".parse::<Algorithm>(), Ok(Algorithm::GreedyBestFirst));
        assert_eq!("BellmanFord".parse::<Algorithm>(), Ok(Algorithm::BellmanFord));
        assert_eq!(
            "astar".parse::<Algorithm>(),
            Err(AlgorithmParseError("astar".to_string()))
        );
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Algorithm::BellmanFord.to_string(), "bellman-ford");
        assert_eq!(Algorithm::UniformCost.to_string(), "dijkstra");
    }

    #[test]
    fn run_reports_path_edges() {
        let mut g = Grid::new(5, 5);
        let r = Algorithm::BreadthFirst.run(&mut g, Point::new(0, 0), Point::new(4, 4));
        assert!(r.found);
        assert_eq!(r.path_edges(), Some(8));
        assert_eq!(r.algorithm, Algorithm::BreadthFirst);
    }

    #[test]
    fn run_without_path_has_no_edges() {
        let mut g = Grid::new(3, 1);
        g.set_wall(Point::new(1, 0), true);
        let r = Algorithm::UniformCost.run(&mut g, Point::new(0, 0), Point::new(2, 0));
        assert!(!r.found);
        assert_eq!(r.path, vec![Point::new(2, 0)]);
        assert_eq!(r.path_edges(), None);
    }
}
