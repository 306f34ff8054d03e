//! Export command - write a generated torus to disk
//!
//! Formats:
//! - `obj`: Wavefront OBJ (positions, texture coordinates, normals, faces)
//! - `interleaved`: raw 32-byte vertex records, plus `<output>.idx` holding
//!   u32 triangle indices and, with `--lines`, `<output>.lidx` holding u32
//!   line indices (native byte order)

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use toroid_mesh::{Mesh, ObjOptions, write_obj_with};

use crate::config::TorusArgs;

/// Output format for the export command
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Wavefront OBJ text
    #[default]
    Obj,
    /// Raw interleaved vertex buffer and index buffers
    Interleaved,
}

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub torus: TorusArgs,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Obj)]
    pub format: ExportFormat,

    /// Include wireframe segments
    #[arg(long)]
    pub lines: bool,

    /// Object name for OBJ output (overrides config)
    #[arg(long)]
    pub name: Option<String>,
}

/// Execute the export command
pub fn execute(args: ExportArgs) -> Result<()> {
    let config = args.torus.load()?;
    let (torus, _) = config.build_torus();
    let lines = args.lines || config.export.lines;
    let name = args.name.as_deref().unwrap_or(config.object_name());

    match args.format {
        ExportFormat::Obj => {
            write_obj_with(torus.mesh(), &args.output, name, ObjOptions { lines })
                .with_context(|| format!("Failed to write OBJ: {}", args.output.display()))?;
        }
        ExportFormat::Interleaved => write_interleaved(torus.mesh(), &args.output, lines)?,
    }

    tracing::info!(
        "Exported {} vertices, {} triangles to {}",
        torus.mesh().vertex_count(),
        torus.mesh().triangle_count(),
        args.output.display()
    );
    Ok(())
}

/// Path of a companion buffer file next to the main output
fn sibling(output: &Path, suffix: &str) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn write_interleaved(mesh: &Mesh, output: &Path, lines: bool) -> Result<()> {
    std::fs::write(output, mesh.interleaved_bytes())
        .with_context(|| format!("Failed to write vertex buffer: {}", output.display()))?;

    let index_path = sibling(output, ".idx");
    std::fs::write(&index_path, mesh.index_bytes())
        .with_context(|| format!("Failed to write index buffer: {}", index_path.display()))?;

    if lines {
        let line_path = sibling(output, ".lidx");
        std::fs::write(&line_path, mesh.line_index_bytes())
            .with_context(|| format!("Failed to write line buffer: {}", line_path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: PathBuf, format: ExportFormat, lines: bool) -> ExportArgs {
        ExportArgs {
            torus: TorusArgs {
                sectors: Some(4),
                sides: Some(4),
                ..TorusArgs::default()
            },
            output,
            format,
            lines,
            name: None,
        }
    }

    #[test]
    fn test_export_obj() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("torus.obj");

        execute(args(output.clone(), ExportFormat::Obj, true)).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("o torus"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 25);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 32);
        assert_eq!(text.lines().filter(|l| l.starts_with("l ")).count(), 32);
    }

    #[test]
    fn test_export_interleaved() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("torus.bin");

        execute(args(output.clone(), ExportFormat::Interleaved, true)).unwrap();

        assert_eq!(std::fs::metadata(&output).unwrap().len(), 25 * 32);
        assert_eq!(
            std::fs::metadata(dir.path().join("torus.bin.idx")).unwrap().len(),
            96 * 4
        );
        assert_eq!(
            std::fs::metadata(dir.path().join("torus.bin.lidx")).unwrap().len(),
            64 * 4
        );
    }

    #[test]
    fn test_export_interleaved_without_lines() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("torus.bin");

        execute(args(output, ExportFormat::Interleaved, false)).unwrap();

        assert!(dir.path().join("torus.bin.idx").exists());
        assert!(!dir.path().join("torus.bin.lidx").exists());
    }
}
