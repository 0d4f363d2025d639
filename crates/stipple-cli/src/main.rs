//! Stipple CLI - Particle collection demos
//!
//! A tool for exercising and demonstrating the Stipple collection engine.

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

/// Stipple - Named particle collection engine
#[derive(Parser)]
#[command(name = "stipple")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a mixed collection and walk the engine surface
    Demo {
        /// Number of circles to scatter
        #[arg(short, long, default_value = "4")]
        circles: usize,
    },

    /// List the registered shape kinds
    Kinds,

    /// Ingest a synthetic label grid
    Labels {
        /// Color regions by label value
        #[arg(long)]
        color_by_label: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Demo { circles } => {
            commands::demo::run(circles)?;
        }

        Commands::Kinds => {
            commands::kinds::run();
        }

        Commands::Labels { color_by_label } => {
            commands::labels::run(color_by_label)?;
        }
    }

    Ok(())
}
