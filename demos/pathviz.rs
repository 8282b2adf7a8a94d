//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin pathviz -- --walls 0.3 --seed 7 --all

use clap::Parser;
use pathviz_demos::Args;

fn main() {
    let args = Args::parse();
    if let Err(e) = pathviz_demos::run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
