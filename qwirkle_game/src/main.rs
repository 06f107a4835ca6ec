use std::io::Write;

use clap::Parser;
use qwirkle_game::{Game, Player};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Play Qwirkle on the console against the computer.
///
/// Commands: `h<x>,<y>;<tile>,<tile>,...` places tiles from your rack in a row
/// starting at (x, y), `v...` does the same in a column, and
/// `r<tile>,<tile>,...` exchanges tiles with the bag.
#[derive(Parser)]
#[command(verbatim_doc_comment)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let two computer players play against each other
    #[arg(long, default_value_t = false)]
    self_play: bool,

    /// Print a summary of the finished game as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Name of the human player
    #[arg(short, long, default_value = "You")]
    name: String,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let players = if args.self_play {
        [Player::computer("Computer 1"), Player::computer("Computer 2")]
    } else {
        [Player::human(&args.name), Player::computer("Computer")]
    };
    let mut game = Game::new(players, seed);

    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let summary = game.play(&mut stdin, &mut stdout)?;

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &summary)?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
