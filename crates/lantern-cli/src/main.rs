//! CLI frontend for the Lantern interactive fiction engine.

mod demo;

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use lantern_core::{Player, World, loader};
use lantern_game::{Game, GameConfig, GameResult, LineConsole};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lantern",
    about = "Lantern, a small interactive fiction engine",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    play: PlayArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options for playing a world, accepted at the top level and by `play`.
#[derive(Args, Debug)]
struct PlayArgs {
    /// JSON world file (default: the built-in demo world)
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not list exits when describing a location
    #[arg(long)]
    no_exits: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world (the default when no command is given)
    Play(PlayArgs),

    /// Validate a JSON world file without playing it
    Check {
        /// JSON world file
        #[arg(short, long)]
        world: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Play(cli.play)) {
        Commands::Play(args) => play(&args),
        Commands::Check { world } => check(&world),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

/// Send logs to stderr so they never mix with the game transcript.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_world(path: Option<&Path>) -> GameResult<World> {
    let world = match path {
        Some(path) => loader::load(path)?,
        None => demo::world()?,
    };
    Ok(world)
}

fn play(args: &PlayArgs) -> GameResult<()> {
    let world = load_world(args.world.as_deref())?;
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.no_exits {
        config = config.with_exits(false);
    }

    let stdin = io::stdin();
    let mut console = LineConsole::new(stdin.lock(), io::stdout());
    Game::new(world, Player::new(), config).play(&mut console)
}

fn check(path: &Path) -> GameResult<()> {
    let world = load_world(Some(path))?;
    let title = world.title().unwrap_or("untitled world");
    println!(
        "{} {title}: {} location{}",
        "ok".green().bold(),
        world.len(),
        if world.len() == 1 { "" } else { "s" },
    );
    for warning in world.warnings() {
        println!("{} {warning}", "warning:".yellow().bold());
    }
    Ok(())
}
