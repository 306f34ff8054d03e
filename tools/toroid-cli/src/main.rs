//! Toroid CLI - torus mesh generation and PNG utilities
//!
//! # Commands
//!
//! - `toroid info` - Print torus parameters and buffer counts
//! - `toroid export` - Write a torus as OBJ or raw interleaved buffers
//! - `toroid png info` - Print the size of a PNG image
//! - `toroid png copy` - Re-encode a PNG as 32-bit RGBA
//!
//! # Usage
//!
//! ```bash
//! # 48x24 torus facing +Y, flat shaded
//! toroid info --sectors 48 --sides 24 --up y --flat
//!
//! # Export using a config file, overriding the tube radius
//! toroid export --config toroid.toml --minor-radius 0.3 -o torus.obj
//!
//! # Raw buffers for direct upload (torus.bin, torus.bin.idx)
//! toroid export -f interleaved -o torus.bin
//! ```
//!
//! Logging follows `RUST_LOG` (default `info`).

mod config;
mod export;
mod image;
mod info;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Toroid CLI - torus mesh generation and PNG utilities
#[derive(Parser)]
#[command(name = "toroid")]
#[command(about = "Generate torus meshes and convert PNG textures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print torus parameters and buffer counts
    Info(info::InfoArgs),

    /// Write a torus mesh to disk
    Export(export::ExportArgs),

    /// Inspect or re-encode PNG images
    Png {
        #[command(subcommand)]
        command: image::PngCommand,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info(args) => info::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Png { command } => image::execute(command),
    }
}
