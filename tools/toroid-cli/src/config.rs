//! toroid.toml config parsing and torus option overrides
//!
//! Every section and field is optional. Command line flags win over the file.
//!
//! ```toml
//! [torus]
//! major_radius = 2.0
//! minor_radius = 0.4
//! sector_count = 48
//! side_count = 24
//! smooth = false
//! up_axis = "y"
//!
//! [export]
//! name = "ring"
//! lines = true
//! reverse_normals = false
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toroid_mesh::{ClampReport, MeshParameters, TorusMeshBuilder, UpAxis};

/// toroid.toml structure
#[derive(Debug, Default, Deserialize)]
pub struct ToroidConfig {
    #[serde(default)]
    pub torus: MeshParameters,
    #[serde(default)]
    pub export: ExportSection,
}

/// Export settings section
#[derive(Debug, Default, Deserialize)]
pub struct ExportSection {
    /// Object name written into OBJ files (default: "torus")
    pub name: Option<String>,
    /// Write wireframe segments alongside triangles
    #[serde(default)]
    pub lines: bool,
    /// Flip normals and winding after generation
    #[serde(default)]
    pub reverse_normals: bool,
}

impl ToroidConfig {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse config from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse toroid.toml")
    }

    /// Object name for exports
    pub fn object_name(&self) -> &str {
        self.export.name.as_deref().unwrap_or("torus")
    }

    /// Generate the configured torus
    ///
    /// Returns the builder together with the corrections applied to the
    /// configured parameters.
    pub fn build_torus(&self) -> (TorusMeshBuilder, ClampReport) {
        let mut torus = TorusMeshBuilder::default();
        let report = torus.configure(self.torus);
        if !report.is_clean() {
            tracing::info!("{} torus parameter(s) adjusted", report.adjustments().len());
        }
        if self.export.reverse_normals {
            torus.reverse_normals();
        }
        (torus, report)
    }
}

/// Torus options shared by the info and export commands
#[derive(Args, Debug, Default)]
pub struct TorusArgs {
    /// Path to a toroid.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Distance from the origin to the centre of the tube
    #[arg(long, allow_negative_numbers = true)]
    pub major_radius: Option<f32>,

    /// Radius of the tube
    #[arg(long, allow_negative_numbers = true)]
    pub minor_radius: Option<f32>,

    /// Number of sectors around the major circle (min 3)
    #[arg(long)]
    pub sectors: Option<u32>,

    /// Number of sides around the tube (min 2)
    #[arg(long)]
    pub sides: Option<u32>,

    /// Use flat shading (one normal per quad)
    #[arg(long, conflicts_with = "smooth")]
    pub flat: bool,

    /// Use smooth shading (shared vertices), overriding the config file
    #[arg(long)]
    pub smooth: bool,

    /// Facing direction: x, y or z
    #[arg(long)]
    pub up: Option<UpAxis>,

    /// Flip normals and triangle winding
    #[arg(long)]
    pub reverse_normals: bool,
}

impl TorusArgs {
    /// Load the config file (if any) and apply command line overrides
    pub fn load(&self) -> Result<ToroidConfig> {
        let mut config = match &self.config {
            Some(path) => ToroidConfig::load(path)?,
            None => ToroidConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut ToroidConfig) {
        let torus = &mut config.torus;
        if let Some(radius) = self.major_radius {
            torus.major_radius = radius;
        }
        if let Some(radius) = self.minor_radius {
            torus.minor_radius = radius;
        }
        if let Some(sectors) = self.sectors {
            torus.sector_count = sectors;
        }
        if let Some(sides) = self.sides {
            torus.side_count = sides;
        }
        if self.flat {
            torus.smooth = false;
        }
        if self.smooth {
            torus.smooth = true;
        }
        if let Some(up) = self.up {
            torus.up_axis = up;
        }
        if self.reverse_normals {
            config.export.reverse_normals = true;
        }
    }
}
