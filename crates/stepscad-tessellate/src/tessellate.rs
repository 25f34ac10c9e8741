//! Face walk: kernel triangulations to [`FaceVector`].

use tracing::{debug, warn};

use crate::mesh::{Face, FaceVector, Triangle};
use crate::shape::{FaceTriangulation, TriangulatedShape};

/// Extract the triangles of every meshed face of `shape`.
///
/// Faces without a triangulation contribute nothing. A shape with no meshed
/// faces yields an empty [`FaceVector`].
pub fn tessellate_shape<S: TriangulatedShape>(shape: &S) -> FaceVector {
    let faces = shape.faces();
    let total = faces.len();

    let result: FaceVector = faces
        .iter()
        .enumerate()
        .filter_map(|(index, face)| tessellate_face(face, index))
        .collect();

    debug!(
        faces = total,
        meshed = result.len(),
        triangles = result.num_triangles(),
        "tessellated shape"
    );
    result
}

/// Extract the triangles of a single face.
///
/// `index` is the face's ordinal in the shape's face enumeration. Returns
/// `None` if the face has no triangulation or it holds no triangles.
pub fn tessellate_face<F: FaceTriangulation>(face: &F, index: usize) -> Option<Face> {
    let Some(nodes) = face.nodes() else {
        debug!(face = index, "face has no triangulation, skipping");
        return None;
    };

    let nodes = match face.location() {
        Some(m) => nodes.iter().map(|p| m.transform_point(p)).collect(),
        None => nodes,
    };
    let reversed = face.is_reversed();

    let mut triangles = Vec::new();
    for [a, b, c] in face.triangles() {
        let (Some(&pa), Some(&pb), Some(&pc)) = (nodes.get(a), nodes.get(b), nodes.get(c)) else {
            warn!(
                face = index,
                nodes = nodes.len(),
                "triangle ({a}, {b}, {c}) references a missing node, skipping"
            );
            continue;
        };
        let tri = Triangle::new(pa, pb, pc);
        triangles.push(if reversed { tri.reversed() } else { tri });
    }

    if triangles.is_empty() {
        return None;
    }
    Some(Face::new(index, triangles))
}
