use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;
use ice_maze_solver::{bfs, Grid, Outcome, Report};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use rayon::prelude::*;

const DEFAULT_MAZE: &str = "test.txt";

struct Solved {
    grid: Grid,
    outcome: Outcome,
}

fn solve_file(path: &PathBuf) -> Result<Solved> {
    let map_data = std::fs::read_to_string(path).context("Failed to read the maze")?;
    let grid = map_data.parse::<Grid>().context("Failed to parse the maze")?;
    let outcome = bfs(&grid, || {
        #[cfg(feature = "coz")]
        coz::progress!("Step");
    })?;
    Ok(Solved { grid, outcome })
}

fn print_solved(solved: &Solved, quiet: bool) -> Result<()> {
    let Solved { grid, outcome } = solved;
    let start = grid.try_start()?;
    if !quiet {
        let finish = grid.try_finish()?;
        let (rows, cols) = grid.dimensions();
        println!("Start point: ({}, {})", start.row(), start.col());
        println!("End point: ({}, {})", finish.row(), finish.col());
        println!("Number of rows: {rows}");
        println!("Number of columns: {cols}");
        println!();
    }
    print!("{}", Report::new(start, outcome));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut quiet = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "-q" || arg == "--quiet" {
            quiet = true;
        } else if arg.starts_with('-') {
            bail!("Unknown flag: {arg}");
        } else {
            paths.push(PathBuf::from(arg));
        }
    }
    if paths.is_empty() {
        paths.push(PathBuf::from(DEFAULT_MAZE));
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed}] {wide_bar} {pos}/{len}")
            .context("Invalid progress template")?,
    );
    if paths.len() == 1 {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    // Each maze gets its own solver; only the parsed grid is shared.
    let results = paths
        .par_iter()
        .map(|path| {
            let ret = solve_file(path);
            pb.inc(1);
            ret
        })
        .collect::<Vec<_>>();
    pb.finish_and_clear();

    let mut failed = 0usize;
    for (path, ret) in paths.iter().zip(&results) {
        if paths.len() > 1 {
            println!("{}", style(path.display()).bold());
        }
        match ret {
            Ok(solved) => {
                info!("Solved {}", path.display());
                print_solved(solved, quiet)?;
            }
            Err(err) => {
                error!("{}: {err:#}", path.display());
                eprintln!("{} {}: {err:#}", style("error:").red(), path.display());
                failed += 1;
            }
        }
        if paths.len() > 1 {
            println!();
        }
    }

    if failed != 0 {
        bail!("{failed}/{} mazes failed", paths.len());
    }
    Ok(())
}
