use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kanban_board::board::render_board;
use kanban_board::config::BoardConfig;
use kanban_board::console::Session;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Interactive console kanban board")]
struct Cli {
    /// Read the roster and starting cards from this JSON file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start without the seed cards (the roster is still loaded)
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Run,
    /// Print the starting board and exit
    List,
}

/// Initialize tracing on stderr so stdout stays the interactive UI
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "kanban_board=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => BoardConfig::load_from(path)?,
        None => BoardConfig::load(),
    };
    if cli.empty {
        config = config.without_cards();
    }
    let mut board = config.into_board()?;
    tracing::info!(
        members = board.roster().len(),
        cards = board.len(),
        "Board ready"
    );

    match cli.command {
        Some(Commands::List) => {
            print!("{}", render_board(&board));
        }
        Some(Commands::Run) | None => {
            let stdin = io::stdin();
            let mut session = Session::new(&mut board, stdin.lock(), io::stdout());
            session.run()?;
        }
    }

    Ok(())
}
