//! Perft node counter.
//!
//! Run with:
//! `cargo run --release --bin perft -- --depth 4`
//! `cargo run --release --bin perft -- --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1" --depth 2 --threads`

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use pinray_chess::chess_errors::ChessErrors;
use pinray_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use pinray_chess::game_state::game_state::GameState;
use pinray_chess::move_generation::legal_move_generator::{
    BruteForceMoveGenerator, PinAwareMoveGenerator,
};
use pinray_chess::move_generation::move_generator::MoveGenerator;
use pinray_chess::move_generation::perft::{perft, perft_multi_threaded, PerftCounts};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position to count from
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Split root moves across threads
    #[arg(long)]
    threads: bool,

    /// Use the apply-and-test reference generator
    #[arg(long)]
    brute_force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&args) {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChessErrors> {
    let game = GameState::from_fen(&args.fen)?;
    let generator: Arc<dyn MoveGenerator> = if args.brute_force {
        Arc::new(BruteForceMoveGenerator)
    } else {
        Arc::new(PinAwareMoveGenerator)
    };

    info!(
        "perft depth {} ({}) started {}",
        args.depth,
        if args.threads { "threaded" } else { "single thread" },
        chrono::Local::now().format("%H:%M:%S")
    );

    let started = Instant::now();
    let counts: PerftCounts = if args.threads {
        perft_multi_threaded(Arc::clone(&generator), &game, args.depth)?
    } else {
        perft(generator.as_ref(), &game, args.depth)?
    };
    let elapsed = started.elapsed();

    println!("nodes         {}", counts.nodes);
    println!("captures      {}", counts.captures);
    println!("checks        {}", counts.checks);
    println!("double checks {}", counts.double_checks);
    println!(
        "elapsed       {:.3} s ({:.0} nodes/s)",
        elapsed.as_secs_f64(),
        counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    Ok(())
}
