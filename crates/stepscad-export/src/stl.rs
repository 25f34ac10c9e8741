//! ASCII STL export.
//!
//! Normals are not computed; every facet carries `0 0 0`. Readers that need
//! normals recompute them from the winding. Vertex values are printed with
//! shortest round-trip formatting, so they are bit-identical to the mesh.

use std::io::{self, Write};

use stepscad_tessellate::FaceVector;

const SOLID_NAME: &str = "stepscad";

/// Write every triangle of every face as one ASCII STL solid.
pub fn write_ascii_stl<W: Write>(faces: &FaceVector, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "solid {SOLID_NAME}")?;
    for tri in faces.triangles() {
        writeln!(writer, "  facet normal 0 0 0")?;
        writeln!(writer, "    outer loop")?;
        for v in &tri.vertices {
            writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {SOLID_NAME}")?;
    Ok(())
}
