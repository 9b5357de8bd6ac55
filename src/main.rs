//! Genedle - CLI
//!
//! Terminal client for the Genedle and Spelling Gene daily gene-symbol
//! word games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use genedle::{
    commands::run_simple,
    core::daily_seed,
    interactive::{GenedleApp, SpellingApp, run_genedle, run_spelling},
    oracle::{DEFAULT_SERVER, GameMode, HttpOracle, SpellingParams},
    session::{GenedleSession, SpellingSession},
};

#[derive(Parser)]
#[command(
    name = "genedle",
    about = "Play the Genedle and Spelling Gene daily gene-symbol word games in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Oracle server base URL (also read from GENEDLE_SERVER)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Puzzle seed; defaults to today's daily puzzle
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guess-acceptance mode: hard (default) or normal
    #[arg(short, long, global = true, default_value = "hard")]
    mode: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Genedle TUI (default)
    Play,

    /// Spelling Gene TUI
    Spelling {
        /// Minimum symbol length
        #[arg(long, default_value_t = 4)]
        min_length: usize,

        /// Minimum number of findable symbols in the puzzle
        #[arg(long, default_value_t = 10)]
        min_symbols: usize,

        /// Number of letters in the grid, center included
        #[arg(long, default_value_t = 7)]
        num_letters: u8,
    },

    /// Simple CLI mode (line-based Genedle without the TUI)
    Simple,
}

fn main() -> Result<()> {
    // Silent unless RUST_LOG asks for output; logs go to stderr so the TUI
    // owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let server = cli
        .server
        .or_else(|| std::env::var("GENEDLE_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let seed = cli.seed.unwrap_or_else(daily_seed);
    let mode = GameMode::from_name(&cli.mode);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&server, seed, mode),
        Commands::Spelling {
            min_length,
            min_symbols,
            num_letters,
        } => {
            let params = SpellingParams {
                seed,
                min_length,
                min_symbols,
                num_letters,
            };
            run_spelling_command(&server, params)
        }
        Commands::Simple => run_simple_command(&server, seed, mode),
    }
}

fn run_play_command(server: &str, seed: u64, mode: GameMode) -> Result<()> {
    let oracle = HttpOracle::new(server)?;
    let session = GenedleSession::new(oracle, seed)?.with_mode(mode);
    run_genedle(GenedleApp::new(session))
}

fn run_spelling_command(server: &str, params: SpellingParams) -> Result<()> {
    let oracle = HttpOracle::new(server)?;
    let session = SpellingSession::new(oracle, params)?;
    run_spelling(SpellingApp::new(session))
}

fn run_simple_command(server: &str, seed: u64, mode: GameMode) -> Result<()> {
    let oracle = HttpOracle::new(server)?;
    let mut session = GenedleSession::new(oracle, seed)?.with_mode(mode);
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}
