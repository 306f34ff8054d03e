//! Wavefront OBJ export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::types::Mesh;

/// Options for OBJ export
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjOptions {
    /// Also write the wireframe segments as `l` records
    pub lines: bool,
}

/// Write a mesh to an OBJ file
///
/// # Example
/// ```no_run
/// use toroid_mesh::{MeshParameters, generate_torus, write_obj};
///
/// let mesh = generate_torus(MeshParameters::default());
/// write_obj(&mesh, "torus.obj".as_ref(), "torus")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_obj(mesh: &Mesh, path: &Path, name: &str) -> io::Result<()> {
    write_obj_with(mesh, path, name, ObjOptions::default())
}

/// Write a mesh to an OBJ file with explicit options
pub fn write_obj_with(mesh: &Mesh, path: &Path, name: &str, options: ObjOptions) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode_obj(mesh, &mut writer, name, options)?;
    writer.flush()
}

/// Encode a mesh as OBJ text into any writer
///
/// Vertex, texture coordinate and normal indices are shared, so every face
/// corner is written as `i/i/i` (1-based).
pub fn encode_obj<W: Write>(mesh: &Mesh, w: &mut W, name: &str, options: ObjOptions) -> io::Result<()> {
    writeln!(w, "# {} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count())?;
    writeln!(w, "o {}", name)?;

    for [x, y, z] in mesh.positions() {
        writeln!(w, "v {} {} {}", x, y, z)?;
    }
    for [s, t] in mesh.tex_coords() {
        writeln!(w, "vt {} {}", s, t)?;
    }
    for [x, y, z] in mesh.normals() {
        writeln!(w, "vn {} {} {}", x, y, z)?;
    }

    for triangle in mesh.indices().chunks_exact(3) {
        let (a, b, c) = (triangle[0] + 1, triangle[1] + 1, triangle[2] + 1);
        writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    if options.lines {
        for segment in mesh.line_indices().chunks_exact(2) {
            writeln!(w, "l {} {}", segment[0] + 1, segment[1] + 1)?;
        }
    }

    Ok(())
}
