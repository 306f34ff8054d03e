//! PNG commands - inspect and re-encode images

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

/// PNG subcommands
#[derive(Subcommand)]
pub enum PngCommand {
    /// Decode a PNG and print its size
    Info {
        /// PNG file to inspect
        path: PathBuf,
    },

    /// Decode a PNG and write it back as 32-bit RGBA
    Copy {
        /// Source PNG
        input: PathBuf,
        /// Destination PNG
        output: PathBuf,
    },
}

/// Execute a PNG subcommand
pub fn execute(command: PngCommand) -> Result<()> {
    match command {
        PngCommand::Info { path } => {
            let image = toroid_png::read_png(&path)
                .with_context(|| format!("Failed to load PNG: {}", path.display()))?;
            println!("{image}");
        }
        PngCommand::Copy { input, output } => {
            let image = toroid_png::read_png(&input)
                .with_context(|| format!("Failed to load PNG: {}", input.display()))?;
            toroid_png::write_png(
                &output,
                image.width,
                image.height,
                toroid_png::BYTES_PER_PIXEL as u8,
                &image.pixels,
            )
            .with_context(|| format!("Failed to save PNG: {}", output.display()))?;
            tracing::info!(
                "Copied {}x{} image to {}",
                image.width,
                image.height,
                output.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        let pixels: Vec<u8> = (0..2 * 3 * 4).map(|v| v as u8 * 10).collect();
        toroid_png::write_png(&input, 2, 3, 4, &pixels).unwrap();

        execute(PngCommand::Copy {
            input,
            output: output.clone(),
        })
        .unwrap();

        let copied = toroid_png::read_png(&output).unwrap();
        assert_eq!((copied.width, copied.height), (2, 3));
        assert_eq!(copied.pixels, pixels);
    }

    #[test]
    fn test_info_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = execute(PngCommand::Info {
            path: dir.path().join("missing.png"),
        });
        assert!(result.is_err());
    }
}
