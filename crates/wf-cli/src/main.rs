//! Console frontend for the Wayfarer interactive fiction engine.

mod commands;
mod console;
mod demo;
mod render;

use std::io::{self, IsTerminal};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::play::PlayOptions;

#[derive(Parser)]
#[command(
    name = "wf",
    about = "Wayfarer: text adventures on a grid of rooms",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter, e.g. `debug` or `wf_fiction=trace` (default: RUST_LOG, then `warn`)
    #[arg(long, global = true)]
    log: Option<String>,

    /// Disable coloured output
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the built-in adventure
    Play {
        /// Label put in front of error messages
        #[arg(short, long, default_value = "Oops")]
        error_prefix: String,

        /// Hide the list of commands under each frame
        #[arg(long)]
        no_commands: bool,

        /// Hide the key under the map
        #[arg(long)]
        no_key: bool,
    },

    /// List every command the game understands
    Verbs,

    /// Show the built-in adventure's title and blurb
    About,
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    if cli.plain || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Play {
            error_prefix,
            no_commands,
            no_key,
        } => commands::play::run(PlayOptions {
            error_prefix,
            show_commands: !no_commands,
            show_key: !no_key,
        }),
        Commands::Verbs => commands::verbs::run(),
        Commands::About => commands::about::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
