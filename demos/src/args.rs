use std::path::PathBuf;

use clap::Parser;
use pathviz_core::{BoardConfig, Point};
use pathviz_search::{Algorithm, PlaybackConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "pathviz")]
#[command(about = "Run grid pathfinding searches and show which cells they explore")]
pub struct Args {
    /// Read the board from an ASCII layout ('.' open, '#' wall, 'S' start, 'F' finish)
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Algorithm to run: dijkstra, greedy, bfs or bellman-ford
    #[arg(short, long, value_name = "NAME", default_value = "dijkstra")]
    pub algorithm: Algorithm,

    /// Run every algorithm on the same board
    #[arg(long, conflicts_with = "algorithm")]
    pub all: bool,

    /// Scatter random walls with this probability per cell (0.0-1.0)
    #[arg(short, long, value_name = "DENSITY")]
    pub walls: Option<f64>,

    /// Seed for the random walls
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Board width, ignored with --layout
    #[arg(long, default_value_t = 50)]
    pub width: i32,

    /// Board height, ignored with --layout
    #[arg(long, default_value_t = 20)]
    pub height: i32,

    /// Summarize the playback schedule of each search
    #[arg(short, long)]
    pub timeline: bool,

    /// Play the search back in the terminal
    #[arg(long, conflicts_with = "all")]
    pub animate: bool,

    /// Milliseconds between visited cells
    #[arg(long, value_name = "MS", default_value_t = 10)]
    pub visit_ms: u64,

    /// Milliseconds between path cells
    #[arg(long, value_name = "MS", default_value_t = 50)]
    pub path_ms: u64,
}

impl Args {
    /// Board shape for `--width`/`--height`. The default size keeps the
    /// default endpoints; other sizes put them on the middle row, a tenth of
    /// the width in from either side.
    pub fn board_config(&self) -> BoardConfig {
        let default = BoardConfig::default();
        if self.width == default.width && self.height == default.height {
            return default;
        }
        let row = self.height / 2;
        let inset = self.width / 10;
        BoardConfig {
            width: self.width,
            height: self.height,
            start: Point::new(inset, row),
            finish: Point::new(self.width - 1 - inset, row),
        }
    }

    pub fn playback(&self) -> PlaybackConfig {
        PlaybackConfig {
            visit_step_ms: self.visit_ms,
            path_step_ms: self.path_ms,
        }
    }

    /// The algorithms to run, in menu order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.all {
            Algorithm::ALL.to_vec()
        } else {
            vec![self.algorithm]
        }
    }
}
