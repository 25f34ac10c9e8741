//! Kernel-facing view of a meshed shape.

use nalgebra::Matrix4;

use crate::mesh::Vertex;

/// Read access to one face of a shape after the kernel has meshed it.
pub trait FaceTriangulation {
    /// The face's node table, in the face's local frame.
    ///
    /// Returns `None` when the kernel produced no triangulation for this face.
    fn nodes(&self) -> Option<Vec<Vertex>>;

    /// Triangles as index triples into [`FaceTriangulation::nodes`].
    fn triangles(&self) -> Vec<[usize; 3]>;

    /// Placement of the face's local frame in shape coordinates.
    fn location(&self) -> Option<Matrix4<f64>> {
        None
    }

    /// True if the face is used with reversed orientation.
    fn is_reversed(&self) -> bool {
        false
    }
}

/// A B-rep shape whose faces carry kernel triangulations.
pub trait TriangulatedShape {
    /// Borrowed view of a single face.
    type Face<'a>: FaceTriangulation
    where
        Self: 'a;

    /// Every topological face of the shape in kernel enumeration order,
    /// including faces the kernel failed to mesh.
    fn faces(&self) -> Vec<Self::Face<'_>>;
}
