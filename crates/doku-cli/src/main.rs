mod io;
mod render;

use clap::{Parser, Subcommand};
use doku_core::{Algorithm, Error, Generator, GeneratorConfig, Grid, SolveStatus};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "doku", version, about = "N×N constraint-grid solver and generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a grid loaded from a file
    Solve {
        /// Puzzle file; `.json` holds a flat array, `.txt` one line of integers
        file: PathBuf,
        /// Algorithm name (see `doku algorithms`)
        #[arg(short, long, default_value = "backtracking")]
        algorithm: String,
        /// Iteration cap for the chosen algorithm
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Generate puzzles, or fully solved grids with --solved
    Generate {
        /// Box size k; grids are k²×k²
        #[arg(short, long, default_value_t = 3)]
        box_size: usize,
        /// How many grids to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,
        /// Write JSON to this file instead of rendering to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit solved grids instead of carved puzzles
        #[arg(long)]
        solved: bool,
        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Retry cap for carve attempts
        #[arg(long)]
        max_attempts: Option<usize>,
    },
    /// List the available solving algorithms
    Algorithms,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Solve {
            file,
            algorithm,
            limit,
        } => solve(&file, &algorithm, limit),
        Command::Generate {
            box_size,
            count,
            output,
            solved,
            seed,
            max_attempts,
        } => generate(box_size, count, output.as_deref(), solved, seed, max_attempts),
        Command::Algorithms => {
            for algo in Algorithm::all() {
                println!("{algo}");
            }
            Ok(())
        }
    }
}

fn solve(
    file: &Path,
    algorithm: &str,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = Algorithm::from_name(algorithm)?;
    let grid = io::load_grid(file)?;

    println!("Base grid:");
    render::print_grid(&grid);

    let mut working = grid.deep_clone();
    let started = Instant::now();
    let status = algorithm.solve(&mut working, limit);
    let elapsed = started.elapsed().as_secs_f64();

    match status {
        SolveStatus::Solved => {
            println!("Solved grid ({elapsed:.3}s):");
            render::print_grid(&working);
            Ok(())
        }
        SolveStatus::Stalled => {
            println!(
                "Stalled at {}% fill after {elapsed:.3}s:",
                working.fill_percentage()
            );
            render::print_grid(&working);
            Ok(())
        }
        SolveStatus::NoSolution => Err(Box::new(Error::NoSolutionFound)),
        SolveStatus::NonConvergence => Err(Box::new(Error::NonConvergence)),
    }
}

fn generate(
    box_size: usize,
    count: usize,
    output: Option<&Path>,
    solved: bool,
    seed: Option<u64>,
    max_attempts: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut generator = match seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    if let Some(cap) = max_attempts {
        generator.set_config(GeneratorConfig {
            max_carve_attempts: cap,
            ..Default::default()
        });
    }

    let started = Instant::now();
    let mut grids: Vec<Grid> = Vec::with_capacity(count);
    for i in 0..count {
        info!("generating grid {}/{count}", i + 1);
        let grid = if solved {
            generator.solved_grid(box_size)?
        } else {
            generator.puzzle(box_size)?
        };
        grids.push(grid);
    }
    println!(
        "Generated {count} grid(s) in {:.3}s",
        started.elapsed().as_secs_f64()
    );

    match output {
        Some(path) => {
            io::save_grids(path, &grids)?;
            println!("Wrote {}", path.display());
        }
        None => {
            for grid in &grids {
                println!("{}% filled:", grid.fill_percentage());
                render::print_grid(grid);
            }
        }
    }
    Ok(())
}
