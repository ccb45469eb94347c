//! snowcodec CLI entry point.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::Level;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "snowcodec")]
#[command(about = "Encode, decode and inspect transaction documents", long_about = None)]
struct Cli {
    /// Codec configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd, cli.config.as_deref()) {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
        None => {
            println!("snowcodec - transaction document codec");
            println!("Run 'snowcodec --help' for usage information.");
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
