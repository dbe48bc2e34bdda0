mod compute;
mod menu;
mod prompt;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use menu::Session;
use prompt::Prompter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use render::{Pacing, Palette};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "grand-hotel")]
#[command(about = "Hilbert's Grand Hotel room assignment demo", long_about = None)]
struct Args {
    /// Rooms in the finite row used by the shifting demos
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    rooms: u32,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = 100)]
    frame_delay_ms: u64,

    /// Plain output: no colors, no screen clearing
    #[arg(long)]
    no_color: bool,

    /// Seed for new guest identifiers
    #[arg(long)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a single room assignment and exit
    Compute {
        /// Print a JSON document instead of the bare room number
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        method: compute::Method,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(Commands::Compute { json, method }) = &args.command {
        let mut stdout = io::stdout().lock();
        return compute::run(method, *json, &mut stdout);
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::debug!(?args, "starting interactive menu");

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut session = Session {
        prompt: Prompter::new(&mut stdin, &mut stdout),
        palette: Palette {
            ansi: !args.no_color,
        },
        pacing: Pacing::new(args.frame_delay_ms),
        rng,
        rooms: args.rooms as usize,
    };
    menu::run(&mut session).context("terminal I/O failed")?;
    Ok(())
}
