//! Wordle Levels - CLI
//!
//! Level-based word guessing with TUI and line-based modes.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;
use wordle_levels::{
    Error,
    commands::{collect_progress, create_game, open_game, run_simple, score_guess},
    config::{DEFAULT_BASE_URL, DEFAULT_STORE_PATH, GameConfig},
    interactive::{App, run_tui},
    logging::{LogFormat, init_logging},
    output::{print_progress, print_score_result, print_share},
};

#[derive(Parser)]
#[command(
    name = "wordle_levels",
    about = "Level-based word guessing game with saved progress and shareable custom games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Store file holding progress, guess history and custom games
    #[arg(long, global = true, env = "WORDLE_LEVELS_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Level catalog JSON file (default: built-in levels)
    #[arg(long, global = true)]
    levels: Option<PathBuf>,

    /// Word list; guesses not in it are rejected (default: accept everything)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Base URL for share links
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (required for logs in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Player to start with (default: first player)
        #[arg(short, long)]
        player: Option<String>,
    },

    /// Simple line-based mode
    Simple {
        #[arg(short, long)]
        player: Option<String>,
    },

    /// Print the feedback for a guess against a target
    Score {
        guess: String,

        /// Target word or phrase (quote phrases)
        target: String,
    },

    /// Create a shareable custom game
    Create {
        /// Target word or phrase
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
    },

    /// Play a custom game from a share link or id
    Open {
        link: String,
    },

    /// Show completed levels per player
    Progress,
}

impl Commands {
    const fn is_tui(&self) -> bool {
        matches!(self, Self::Play { .. } | Self::Open { .. })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or(Commands::Play { player: None });

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    // The TUI owns the terminal; only log there when a file is given
    if !command.is_tui() || cli.log_file.is_some() {
        init_logging(cli.verbose, cli.log_file.as_deref(), format)?;
    }

    let config = GameConfig::new()
        .with_store(cli.store)
        .with_levels(cli.levels)
        .with_dictionary(cli.dictionary)
        .with_base_url(cli.base_url);

    match command {
        Commands::Play { player } => run_play_command(&config, player.as_deref()),
        Commands::Simple { player } => run_simple_command(&config, player.as_deref()),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
        Commands::Create { word } => run_create_command(&config, &word.join(" ")),
        Commands::Open { link } => run_open_command(&config, &link),
        Commands::Progress => run_progress_command(&config),
    }
}

fn run_play_command(config: &GameConfig, player: Option<&str>) -> Result<()> {
    let game = config.build_game()?;
    if let Some(player) = player {
        GameConfig::require_player(game.catalog(), player)?;
    }

    run_tui(App::new(game).start(player))
}

fn run_simple_command(config: &GameConfig, player: Option<&str>) -> Result<()> {
    let mut game = config.build_game()?;
    if let Some(player) = player {
        GameConfig::require_player(game.catalog(), player)?;
    }

    run_simple(&mut game, player)?;
    Ok(())
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target)?;
    print_score_result(&result.guess, &result.score, &result.layout);
    Ok(())
}

fn run_create_command(config: &GameConfig, word: &str) -> Result<()> {
    let mut game = config.build_game()?;
    let created = create_game(&mut game, word, &config.base_url, &mut rand::rng())?;
    print_share(&created.id, &created.link);
    Ok(())
}

fn run_open_command(config: &GameConfig, link: &str) -> Result<()> {
    let mut game = config.build_game()?;
    match open_game(&mut game, link) {
        Ok(_) => {}
        // The TUI shows the "created on another device" message
        Err(Error::UnknownCustomGame(id)) => warn!(id = %id, "custom game not stored here"),
        Err(e) => return Err(e.into()),
    }

    run_tui(App::new(game))
}

fn run_progress_command(config: &GameConfig) -> Result<()> {
    let game = config.build_game()?;
    for (player, statuses) in collect_progress(&game) {
        print_progress(&player, &statuses);
    }
    println!();
    Ok(())
}
