#![warn(missing_docs)]

//! Text exporters for stepscad.
//!
//! All writers take a [`FaceVector`](stepscad_tessellate::FaceVector) and a
//! [`std::io::Write`] sink:
//! - [`write_ascii_stl`]: flat ASCII STL with placeholder normals
//! - [`write_scad_polyhedron`]: one OpenSCAD `polyhedron()` for the whole shape
//! - [`write_scad_faces`]: one colored `polyhedron()` per source face
//!
//! Empty input always produces syntactically valid, empty output.

mod palette;
mod scad;
mod stl;

pub use palette::{face_color, Rgb, PALETTE};
pub use scad::{write_scad_faces, write_scad_polyhedron};
pub use stl::write_ascii_stl;
