#![warn(missing_docs)]

//! Triangle extraction for stepscad.
//!
//! A geometry kernel meshes every face of a B-rep shape in place. This crate
//! walks those faces and copies each face's triangulation into a plain
//! [`FaceVector`] that the exporters consume:
//! 1. Enumerate faces in kernel order
//! 2. Skip faces that carry no triangulation
//! 3. Resolve node indices, applying the face placement
//! 4. Flip winding on reversed faces
//!
//! The kernel side is abstracted by [`TriangulatedShape`] and
//! [`FaceTriangulation`], so any kernel that can expose a per-face node table
//! and index triples can drive the adapter.

mod mesh;
mod shape;
mod tessellate;

pub use mesh::{Face, FaceVector, Triangle, Vertex};
pub use shape::{FaceTriangulation, TriangulatedShape};
pub use tessellate::{tessellate_face, tessellate_shape};
