//! Random self-play session.
//!
//! Plays random legal moves from a position, then undoes the whole game and
//! checks the starting position comes back intact.
//!
//! Run with:
//! `cargo run --release -- --plies 60 --seed 7 --show-board`
//! `RUST_LOG=trace cargo run -- --plies 4`

use std::io::Write;

use clap::Parser;
use log::{error, info, warn};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pinray_chess::chess_errors::ChessErrors;
use pinray_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use pinray_chess::game_state::game_state::GameState;
use pinray_chess::move_generation::legal_move_checks::inspect_position;
use pinray_chess::move_generation::legal_move_generator::legal_moves;
use pinray_chess::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position to start from
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Maximum number of plies to play
    #[arg(long, default_value_t = 40)]
    plies: usize,

    /// RNG seed; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every move
    #[arg(long)]
    show_board: bool,

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
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::from_fen(&args.fen)?;
    let start = game.clone();

    info!(
        "session started {} (seed {seed})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}\n", render_game_state(&game));

    for ply in 1..=args.plies {
        let moves = legal_moves(&game)?;
        let Some(mv) = moves.as_slice().choose(&mut rng).copied() else {
            let inspection = inspect_position(&game)?;
            let verdict = if inspection.in_check { "in check" } else { "not in check" };
            info!(
                "{:?} has no legal moves ({verdict}) after {} plies",
                game.side_to_move(),
                ply - 1
            );
            break;
        };

        game.make_move(&mv);
        println!("{ply:>3}. {mv} ({} options)", moves.len());
        if args.show_board {
            println!("{}\n", render_game_state(&game));
        }
    }

    println!("\nfinal position: {}", game.get_fen());
    if !args.show_board {
        println!("{}", render_game_state(&game));
    }

    let played = game.move_history().len();
    while game.undo_move().is_some() {}
    if game == start {
        info!("undo of {played} plies restored the start position");
    } else {
        warn!("undo of {played} plies did not restore the start position");
    }
    Ok(())
}
