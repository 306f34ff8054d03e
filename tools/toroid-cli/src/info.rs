//! Info command - print torus parameters and buffer counts

use std::fmt::Write;

use anyhow::Result;
use clap::Args;
use toroid_mesh::layout::{INTERLEAVED_ATTRIBUTES, INTERLEAVED_STRIDE};

use crate::config::TorusArgs;

/// Arguments for the info command
#[derive(Args, Default)]
pub struct InfoArgs {
    #[command(flatten)]
    pub torus: TorusArgs,

    /// Also print the interleaved vertex layout
    #[arg(long)]
    pub layout: bool,
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

/// Build the report printed by [`execute`]
fn render(args: &InfoArgs) -> Result<String> {
    let config = args.torus.load()?;
    let (torus, report) = config.build_torus();

    let mut out = String::new();
    writeln!(out, "{torus}")?;
    write!(out, "    Line Count: {}", torus.mesh().line_index_count() / 2)?;

    for adjustment in report.adjustments() {
        write!(out, "\n  Adjusted: {adjustment}")?;
    }

    if args.layout {
        write!(
            out,
            "\n\nInterleaved layout (stride {} bytes):",
            INTERLEAVED_STRIDE
        )?;
        for attribute in INTERLEAVED_ATTRIBUTES {
            write!(
                out,
                "\n  {:>9}: {} x f32 at offset {}",
                attribute.name, attribute.components, attribute.offset
            )?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_torus() -> TorusArgs {
        TorusArgs {
            sectors: Some(4),
            sides: Some(4),
            ..TorusArgs::default()
        }
    }

    #[test]
    fn test_info_reports_counts() {
        let text = render(&InfoArgs {
            torus: small_torus(),
            layout: false,
        })
        .unwrap();

        assert!(text.contains("===== Torus ====="));
        assert!(text.contains("  Vertex Count: 25"));
        assert!(text.contains("Triangle Count: 32"));
        assert!(text.contains("    Line Count: 32"));
        assert!(!text.contains("Adjusted:"));
        assert!(!text.contains("Interleaved layout"));
    }

    #[test]
    fn test_info_lists_adjustments() {
        let text = render(&InfoArgs {
            torus: TorusArgs {
                sectors: Some(1),
                minor_radius: Some(-1.0),
                ..small_torus()
            },
            layout: false,
        })
        .unwrap();

        assert!(text.contains("  Adjusted: minor radius -1 ignored, kept 0.5"));
        assert!(text.contains("  Adjusted: sector count 1 raised to 3"));
    }

    #[test]
    fn test_info_layout_table() {
        let text = render(&InfoArgs {
            torus: small_torus(),
            layout: true,
        })
        .unwrap();

        assert!(text.contains("Interleaved layout (stride 32 bytes):"));
        for attribute in INTERLEAVED_ATTRIBUTES {
            let line = format!(
                "  {:>9}: {} x f32 at offset {}",
                attribute.name, attribute.components, attribute.offset
            );
            assert!(text.contains(&line), "missing {line:?}");
        }
        assert!(text.contains("at offset 24"));
    }
}
