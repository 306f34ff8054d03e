//! Torus generation with smooth or flat shading
//!
//! Parametric surface, built around +Z:
//!
//! ```text
//! x = (R + r * cos(u)) * cos(v)
//! y = (R + r * cos(u)) * sin(v)
//! z = r * sin(u)
//! ```
//!
//! where `u` is the side angle (from π down to -π, starting inside the hole)
//! and `v` is the sector angle (0 to 2π).

use std::f32::consts::PI;
use std::fmt;

use glam::Vec3;
use tracing::debug;

use super::normals::compute_face_normal;
use super::types::{ClampReport, Mesh, MeshParameters, UpAxis};

/// Generate a torus mesh from parameters
///
/// Invalid parameters are clamped the same way [`TorusMeshBuilder::configure`]
/// does, starting from the default parameters.
pub fn generate_torus(params: MeshParameters) -> Mesh {
    TorusMeshBuilder::new(params).into_mesh()
}

/// Owns a set of torus parameters and the mesh generated from them
///
/// Changing a radius, a count or the shading rebuilds the mesh from scratch.
/// Changing only the up axis, or reversing normals, mutates the current mesh
/// in place.
#[derive(Clone, Debug)]
pub struct TorusMeshBuilder {
    params: MeshParameters,
    mesh: Mesh,
}

impl Default for TorusMeshBuilder {
    fn default() -> Self {
        let params = MeshParameters::default();
        Self {
            params,
            mesh: build_mesh(&params),
        }
    }
}

impl TorusMeshBuilder {
    /// Create a builder and generate its first mesh
    ///
    /// Rejected radii fall back to the default radii.
    pub fn new(params: MeshParameters) -> Self {
        let mut builder = Self {
            params: MeshParameters::default(),
            mesh: Mesh::new(),
        };
        builder.configure(params);
        builder
    }

    /// Validate parameters and regenerate the mesh
    ///
    /// Never fails: see [`MeshParameters::clamp_against`] for the rules. The
    /// returned report lists every correction that was made.
    pub fn configure(&mut self, params: MeshParameters) -> ClampReport {
        let (params, report) = params.clamp_against(&self.params);
        self.params = params;
        self.mesh = build_mesh(&self.params);
        report
    }

    /// Set the major radius (rebuilds when changed)
    pub fn set_major_radius(&mut self, major_radius: f32) -> ClampReport {
        if major_radius == self.params.major_radius {
            return ClampReport::default();
        }
        self.configure(MeshParameters {
            major_radius,
            ..self.params
        })
    }

    /// Set the minor radius (rebuilds when changed)
    pub fn set_minor_radius(&mut self, minor_radius: f32) -> ClampReport {
        if minor_radius == self.params.minor_radius {
            return ClampReport::default();
        }
        self.configure(MeshParameters {
            minor_radius,
            ..self.params
        })
    }

    /// Set the number of sectors (rebuilds when changed)
    pub fn set_sector_count(&mut self, sector_count: u32) -> ClampReport {
        if sector_count == self.params.sector_count {
            return ClampReport::default();
        }
        self.configure(MeshParameters {
            sector_count,
            ..self.params
        })
    }

    /// Set the number of sides (rebuilds when changed)
    pub fn set_side_count(&mut self, side_count: u32) -> ClampReport {
        if side_count == self.params.side_count {
            return ClampReport::default();
        }
        self.configure(MeshParameters {
            side_count,
            ..self.params
        })
    }

    /// Switch between smooth and flat shading (rebuilds when changed)
    pub fn set_smooth(&mut self, smooth: bool) {
        if smooth == self.params.smooth {
            return;
        }
        self.params.smooth = smooth;
        self.mesh = build_mesh(&self.params);
    }

    /// Face a different axis by rotating the current mesh in place
    pub fn set_up_axis(&mut self, up_axis: UpAxis) {
        if up_axis == self.params.up_axis {
            return;
        }
        self.mesh.change_up_axis(self.params.up_axis, up_axis);
        self.params.up_axis = up_axis;
    }

    /// Flip normals and triangle winding of the current mesh
    pub fn reverse_normals(&mut self) {
        self.mesh.reverse_normals();
    }

    /// Currently accepted parameters
    pub fn params(&self) -> &MeshParameters {
        &self.params
    }

    pub fn major_radius(&self) -> f32 {
        self.params.major_radius
    }

    pub fn minor_radius(&self) -> f32 {
        self.params.minor_radius
    }

    pub fn sector_count(&self) -> u32 {
        self.params.sector_count
    }

    pub fn side_count(&self) -> u32 {
        self.params.side_count
    }

    pub fn is_smooth(&self) -> bool {
        self.params.smooth
    }

    pub fn up_axis(&self) -> UpAxis {
        self.params.up_axis
    }

    /// Generated mesh
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Take the generated mesh, dropping the builder
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

impl fmt::Display for TorusMeshBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Torus =====")?;
        writeln!(f, "  Major Radius: {}", self.params.major_radius)?;
        writeln!(f, "  Minor Radius: {}", self.params.minor_radius)?;
        writeln!(f, "  Sector Count: {}", self.params.sector_count)?;
        writeln!(f, "    Side Count: {}", self.params.side_count)?;
        writeln!(f, "Smooth Shading: {}", self.params.smooth)?;
        writeln!(f, "       Up Axis: {}", self.params.up_axis)?;
        writeln!(f, "Triangle Count: {}", self.mesh.triangle_count())?;
        writeln!(f, "   Index Count: {}", self.mesh.index_count())?;
        writeln!(f, "  Vertex Count: {}", self.mesh.vertex_count())?;
        writeln!(f, "  Normal Count: {}", self.mesh.normal_count())?;
        write!(f, "TexCoord Count: {}", self.mesh.tex_coord_count())
    }
}

/// Build a fresh mesh for already-validated parameters
fn build_mesh(params: &MeshParameters) -> Mesh {
    let mut mesh = if params.smooth {
        build_smooth(params)
    } else {
        build_flat(params)
    };

    if params.up_axis != UpAxis::Z {
        mesh.change_up_axis(UpAxis::Z, params.up_axis);
    }

    debug!(
        "built {} torus: {} vertices, {} triangles",
        if params.smooth { "smooth" } else { "flat" },
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    mesh
}

/// One sample of the parametric grid, without normal
#[derive(Clone, Copy, Debug)]
struct GridSample {
    position: Vec3,
    tex_coord: (f32, f32),
}

/// Sample the surface on a `(sides + 1) × (sectors + 1)` grid
///
/// The last column repeats the first one with s = 1.0 so textures wrap
/// without a seam.
fn sample_grid(params: &MeshParameters) -> Vec<GridSample> {
    let sectors = params.sector_count;
    let sides = params.side_count;
    let sector_step = 2.0 * PI / sectors as f32;
    let side_step = 2.0 * PI / sides as f32;

    let mut samples = Vec::with_capacity(((sides + 1) * (sectors + 1)) as usize);
    for i in 0..=sides {
        let side_angle = PI - i as f32 * side_step;
        let xy = params.major_radius + params.minor_radius * side_angle.cos();
        let z = params.minor_radius * side_angle.sin();

        for j in 0..=sectors {
            let sector_angle = j as f32 * sector_step;
            let (sin_v, cos_v) = sector_angle.sin_cos();
            samples.push(GridSample {
                position: Vec3::new(xy * cos_v, xy * sin_v, z),
                tex_coord: (j as f32 / sectors as f32, i as f32 / sides as f32),
            });
        }
    }
    samples
}

/// Shared-vertex grid with per-vertex normals
fn build_smooth(params: &MeshParameters) -> Mesh {
    let sectors = params.sector_count;
    let sides = params.side_count;
    let major = params.major_radius;
    let minor = params.minor_radius;
    let length_inv = 1.0 / minor;
    let sector_step = 2.0 * PI / sectors as f32;
    let side_step = 2.0 * PI / sides as f32;

    let cells = (sides * sectors) as usize;
    let mut mesh = Mesh::with_capacity(((sides + 1) * (sectors + 1)) as usize, cells * 6, cells * 4);

    for i in 0..=sides {
        let side_angle = PI - i as f32 * side_step;
        let xy = minor * side_angle.cos();
        let z = minor * side_angle.sin();

        for j in 0..=sectors {
            let sector_angle = j as f32 * sector_step;
            let (sin_v, cos_v) = sector_angle.sin_cos();

            // offset from the tube centre, which is also the unnormalized normal
            let offset = Vec3::new(xy * cos_v, xy * sin_v, z);
            let normal = offset * length_inv;
            let position = offset + Vec3::new(major * cos_v, major * sin_v, 0.0);
            let tex_coord = (j as f32 / sectors as f32, i as f32 / sides as f32);

            mesh.add_vertex(position, normal, tex_coord);
        }
    }

    //  k1--k1+1
    //  |  / |
    //  | /  |
    //  k2--k2+1
    for i in 0..sides {
        let mut k1 = i * (sectors + 1);
        let mut k2 = k1 + sectors + 1;

        for _ in 0..sectors {
            mesh.add_triangle(k1, k2, k1 + 1);
            mesh.add_triangle(k1 + 1, k2, k2 + 1);

            mesh.add_line(k1, k2);
            mesh.add_line(k1, k1 + 1);

            k1 += 1;
            k2 += 1;
        }
    }

    mesh.rebuild_interleaved();
    mesh
}

/// Independent quads, four vertices each, one face normal per quad
fn build_flat(params: &MeshParameters) -> Mesh {
    let sectors = params.sector_count;
    let sides = params.side_count;
    let grid = sample_grid(params);

    let cells = (sides * sectors) as usize;
    let mut mesh = Mesh::with_capacity(cells * 4, cells * 6, cells * 4);

    for i in 0..sides {
        let mut vi1 = (i * (sectors + 1)) as usize;
        let mut vi2 = ((i + 1) * (sectors + 1)) as usize;

        for _ in 0..sectors {
            //  v1--v3
            //  |    |
            //  v2--v4
            let v1 = grid[vi1];
            let v2 = grid[vi2];
            let v3 = grid[vi1 + 1];
            let v4 = grid[vi2 + 1];

            let normal = compute_face_normal(v1.position, v2.position, v3.position);

            let index = mesh.add_vertex(v1.position, normal, v1.tex_coord);
            mesh.add_vertex(v2.position, normal, v2.tex_coord);
            mesh.add_vertex(v3.position, normal, v3.tex_coord);
            mesh.add_vertex(v4.position, normal, v4.tex_coord);

            mesh.add_triangle(index, index + 1, index + 2);
            mesh.add_triangle(index + 2, index + 1, index + 3);

            mesh.add_line(index, index + 1);
            mesh.add_line(index, index + 2);

            vi1 += 1;
            vi2 += 1;
        }
    }

    mesh.rebuild_interleaved();
    mesh
}
