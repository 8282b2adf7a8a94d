//! Command-line demo for pathviz: build a board, run searches, show what
//! they explored.

pub mod args;
pub mod render;
pub mod term;

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use pathviz_core::{Board, BoardError, Layout, LayoutError};
use pathviz_search::Timeline;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use args::Args;

/// Anything that stops the demo.
#[derive(Debug)]
pub enum DemoError {
    Read { path: PathBuf, source: io::Error },
    Layout(LayoutError),
    Board(BoardError),
    Density(f64),
    Terminal(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            DemoError::Layout(e) => write!(f, "bad layout: {e}"),
            DemoError::Board(e) => write!(f, "bad board: {e}"),
            DemoError::Density(d) => write!(f, "wall density {d} is not within 0.0-1.0"),
            DemoError::Terminal(e) => write!(f, "terminal: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Read { source, .. } => Some(source),
            DemoError::Layout(e) => Some(e),
            DemoError::Board(e) => Some(e),
            DemoError::Density(_) => None,
            DemoError::Terminal(e) => Some(e),
        }
    }
}

impl From<LayoutError> for DemoError {
    fn from(e: LayoutError) -> Self {
        DemoError::Layout(e)
    }
}

impl From<BoardError> for DemoError {
    fn from(e: BoardError) -> Self {
        DemoError::Board(e)
    }
}

/// The board described by `args`: a layout file or a sized empty board,
/// then random walls if requested.
pub fn build_board(args: &Args) -> Result<Board, DemoError> {
    let mut board = match &args.layout {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| DemoError::Read {
                path: path.clone(),
                source,
            })?;
            Board::from_layout(&Layout::parse(&text)?)
        }
        None => Board::new(args.board_config())?,
    };
    if let Some(density) = args.walls {
        if !(0.0..=1.0).contains(&density) {
            return Err(DemoError::Density(density));
        }
        let mut rng = StdRng::seed_from_u64(args.seed);
        board.scatter_walls(&mut rng, density);
    }
    Ok(board)
}

/// Run the demo described by `args`, printing to stdout.
pub fn run(args: &Args) -> Result<(), DemoError> {
    let board = build_board(args)?;
    let playback = args.playback();

    if args.animate {
        let result = args
            .algorithm
            .run(&mut board.snapshot(), board.start(), board.finish());
        term::animate(&board, &result, playback).map_err(DemoError::Terminal)?;
        println!("{}", render::summary(&result));
        return Ok(());
    }

    for algorithm in args.algorithms() {
        let result = algorithm.run(&mut board.snapshot(), board.start(), board.finish());
        println!("{}", render::render(&board, &result));
        println!("{}", render::summary(&result));
        if args.timeline {
            let t = Timeline::from_result(&result, playback);
            println!("  playback: {} steps over {} ms", t.len(), t.duration_ms());
        }
        println!();
    }
    Ok(())
}
