//! Carve a maze, solve it, and print both to stdout.
//!
//! Run: cargo run --bin maze -- [rows] [cols] [seed]

use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

use mazegrid_core::{Error, Grid};
use mazegrid_gen::MazeGen;
use mazegrid_paths::Search;

fn main() {
    let mut args = std::env::args().skip(1);
    let rows = arg_or(args.next(), 20);
    let cols = arg_or(args.next(), 20);
    let seed = arg_or(args.next(), rand::random::<u64>());

    if let Err(e) = run(rows, cols, seed) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(rows: i32, cols: i32, seed: u64) -> Result<(), Error> {
    let mut grid = Grid::new(rows, cols)?;
    MazeGen::new(StdRng::seed_from_u64(seed)).carve(&mut grid)?;
    print!("{}", grid.to_ascii());

    let path = Search::for_grid(&grid).solve(&grid);
    let steps: Vec<String> = path.iter().map(|c| c.to_string()).collect();
    println!("seed {seed}: {} -> {} in {} cells", grid.start(), grid.end(), path.len());
    println!("{}", steps.join(" "));
    Ok(())
}

fn arg_or<T: FromStr>(arg: Option<String>, default: T) -> T {
    arg.and_then(|s| s.parse().ok()).unwrap_or(default)
}
