//! Gobang engine CLI
//!
//! - `gobang demo` - run scripted scenarios against the searcher
//! - `gobang next --board <snapshot.json>` - choose one move for a captured
//!   board state, as the robot's control process would

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gobang::{
    ArmController, BoardSnapshot, BoardSource, Coord, DriverError, GameDriver, Searcher,
    StepOutcome,
};

/// Gobang move-selection engine
#[derive(Parser)]
#[command(name = "gobang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a few scripted search scenarios
    Demo,
    /// Choose the next move for a board snapshot
    Next {
        /// JSON snapshot with "machine" and "human" stone lists
        #[arg(long)]
        board: PathBuf,
        /// Highest column index of the grid
        #[arg(long, default_value_t = 12)]
        cols: i32,
        /// Highest row index of the grid
        #[arg(long, default_value_t = 12)]
        rows: i32,
        /// Search depth; odd values keep the root ply on the machine side
        #[arg(long, default_value_t = 3)]
        depth: u8,
        /// Attack ratio: above 1.0 plays offense, below 1.0 defense
        #[arg(long, default_value_t = 1.0)]
        ratio: f64,
    },
}

/// Board source backed by a one-shot snapshot file.
struct FileSource {
    snapshot: Option<BoardSnapshot>,
}

impl BoardSource for FileSource {
    fn capture(&mut self) -> Result<BoardSnapshot, DriverError> {
        self.snapshot
            .take()
            .ok_or_else(|| DriverError::Vision("snapshot already consumed".into()))
    }
}

/// Arm stand-in that prints the placement instead of driving PWM.
struct PrintArm;

impl ArmController for PrintArm {
    fn place_at(&mut self, coord: Coord) -> Result<(), DriverError> {
        println!("place at {coord}");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Next {
            board,
            cols,
            rows,
            depth,
            ratio,
        }) => run_next(&board, cols, rows, depth, ratio),
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn run_next(board: &PathBuf, cols: i32, rows: i32, depth: u8, ratio: f64) -> anyhow::Result<()> {
    let raw = fs::read_to_string(board)
        .with_context(|| format!("reading snapshot {}", board.display()))?;
    let snapshot: BoardSnapshot =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", board.display()))?;

    let searcher = Searcher::with_config(cols, rows, depth, ratio);
    let mut driver = GameDriver::new(FileSource { snapshot: Some(snapshot) }, PrintArm, searcher);

    match driver.step()? {
        StepOutcome::Played(_) => {
            let stats = driver.searcher().statistics();
            println!(
                "expanded {} nodes, {} cutoffs",
                stats.expanded_nodes, stats.beta_cutoffs
            );
        }
        StepOutcome::MachineWon => println!("game over: machine already has five in a row"),
        StepOutcome::HumanWon => println!("game over: human already has five in a row"),
    }
    Ok(())
}

fn run_demo() {
    println!("Gobang engine demo\n");

    demo_opening();
    demo_win_in_one();
    demo_block();
}

fn demo_opening() {
    println!("--- Opening ---");
    let searcher = Searcher::new(12, 12);
    // The first move cannot come from the search (no stone to be adjacent
    // to); the driver policy is the grid center.
    println!("  forced opening: {}\n", searcher.grid().center());
}

fn demo_win_in_one() {
    println!("--- Win in one ---");
    let machine = [
        Coord::new(6, 6),
        Coord::new(7, 7),
        Coord::new(8, 8),
        Coord::new(9, 9),
    ];
    let mut searcher = Searcher::with_config(12, 12, 1, 1.0);

    match searcher.get_next_move(&machine, &[]) {
        Some(coord) => {
            let stats = searcher.statistics();
            println!("  machine has an open diagonal four");
            println!("  plays {coord} (expected (5, 5) or (10, 10))");
            println!(
                "  expanded {} nodes, {} cutoffs\n",
                stats.expanded_nodes, stats.beta_cutoffs
            );
        }
        None => println!("  no move found\n"),
    }
}

fn demo_block() {
    println!("--- Block ---");
    let human = [
        Coord::new(5, 5),
        Coord::new(6, 5),
        Coord::new(7, 5),
        Coord::new(8, 5),
    ];
    let machine = [Coord::new(4, 5)];
    let mut searcher = Searcher::with_config(12, 12, 2, 1.0);

    match searcher.get_next_move(&machine, &human) {
        Some(coord) => {
            let stats = searcher.statistics();
            println!("  human has a four blocked on one side");
            println!("  plays {coord} (expected (9, 5))");
            println!(
                "  expanded {} nodes, {} cutoffs\n",
                stats.expanded_nodes, stats.beta_cutoffs
            );
        }
        None => println!("  no move found\n"),
    }
}
