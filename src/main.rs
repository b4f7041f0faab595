//! Command-line evaluator
//!
//! Replays a sequence of moves from the empty board, prints the resulting
//! position and its score, and optionally the best reply.

use anyhow::{bail, Context, Result};
use clap::Parser;
use penta::search::DEFAULT_CAPACITY;
use penta::{Engine, EngineConfig, Pos, DEFAULT_DEPTH};

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate a 6x6 connect-five position")]
struct Cli {
    /// Moves to replay from the empty board, White first (e.g. 2,2 3,3)
    moves: Vec<Pos>,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: i32,

    /// Transposition table slots
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    tt_capacity: usize,

    /// Seed for the Zobrist keys
    #[arg(long)]
    seed: Option<u64>,

    /// Also search for the best move of the side to move
    #[arg(long)]
    best_move: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if cli.depth < 0 {
        bail!("--depth must be >= 0");
    }

    let mut engine = Engine::new(EngineConfig {
        default_depth: cli.depth,
        tt_capacity: cli.tt_capacity,
        seed: cli.seed,
    });

    let mut position = engine.new_position();
    for (i, &pos) in cli.moves.iter().enumerate() {
        position
            .try_play(pos)
            .with_context(|| format!("move {} ({pos})", i + 1))?;
    }

    println!("{position}");

    let analysis = engine
        .analyze(&mut position)
        .context("search returned no score")?;
    println!(
        "score {} depth {} nodes {} time {}ms",
        analysis.score, analysis.depth, analysis.nodes, analysis.time_ms
    );

    if cli.best_move {
        match engine.best_move(&mut position, cli.depth) {
            Some(result) => println!(
                "best move {} score {} nodes {} time {}ms",
                result.best_move, result.score, result.nodes, result.time_ms
            ),
            None => println!("no move: game is over"),
        }
    }

    Ok(())
}
