//! Triangle and face containers produced by the adapter.

/// A mesh vertex in source geometry units.
pub type Vertex = nalgebra::Point3<f64>;

/// Three ordered vertices. Winding follows the kernel's face orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices in winding order.
    pub vertices: [Vertex; 3],
}

impl Triangle {
    /// Create a triangle from three vertices.
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// The same triangle with the opposite winding.
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(c, b, a)
    }
}

/// Triangles extracted from one topological face of the source shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    index: usize,
    triangles: Vec<Triangle>,
}

impl Face {
    /// Create a face from its source ordinal and its triangles.
    pub fn new(index: usize, triangles: Vec<Triangle>) -> Self {
        Self { index, triangles }
    }

    /// Ordinal of the source face in the kernel's face enumeration.
    ///
    /// Faces that failed to mesh still consume an ordinal, so these are not
    /// necessarily contiguous.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Triangles of this face, in kernel order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }
}

/// All triangulated faces of a shape, in traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceVector {
    faces: Vec<Face>,
}

impl FaceVector {
    /// Create an empty face vector.
    pub fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Append a face. Empty faces are not recorded.
    pub fn push(&mut self, face: Face) {
        if !face.triangles.is_empty() {
            self.faces.push(face);
        }
    }

    /// Faces in traversal order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True if no face was triangulated.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Total number of triangles over all faces.
    pub fn num_triangles(&self) -> usize {
        self.faces.iter().map(Face::num_triangles).sum()
    }

    /// Every triangle of every face, flattened in order.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> + '_ {
        self.faces.iter().flat_map(|f| f.triangles.iter())
    }

    /// Axis-aligned bounding box `(min, max)`, or `None` when empty.
    pub fn bounding_box(&self) -> Option<(Vertex, Vertex)> {
        let mut vertices = self.triangles().flat_map(|t| t.vertices.iter());
        let first = *vertices.next()?;
        Some(vertices.fold((first, first), |(min, max), v| {
            (min.inf(v), max.sup(v))
        }))
    }
}

impl FromIterator<Face> for FaceVector {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut faces = FaceVector::new();
        for face in iter {
            faces.push(face);
        }
        faces
    }
}

impl<'a> IntoIterator for &'a FaceVector {
    type Item = &'a Face;
    type IntoIter = std::slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(z: f64) -> Triangle {
        Triangle::new(
            Vertex::new(0.0, 0.0, z),
            Vertex::new(1.0, 0.0, z),
            Vertex::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn test_reversed_swaps_first_and_last() {
        let t = tri(0.0);
        let r = t.reversed();
        assert_eq!(r.vertices[0], t.vertices[2]);
        assert_eq!(r.vertices[1], t.vertices[1]);
        assert_eq!(r.vertices[2], t.vertices[0]);
        assert_eq!(r.reversed(), t);
    }

    #[test]
    fn test_empty_faces_are_dropped() {
        let mut faces = FaceVector::new();
        faces.push(Face::new(0, Vec::new()));
        faces.push(Face::new(1, vec![tri(0.0)]));
        assert_eq!(faces.len(), 1);
        assert_eq!(faces.faces()[0].index(), 1);
    }

    #[test]
    fn test_counts_and_flatten_order() {
        let faces: FaceVector = vec![
            Face::new(0, vec![tri(0.0), tri(1.0)]),
            Face::new(2, vec![tri(2.0)]),
        ]
        .into_iter()
        .collect();

        assert_eq!(faces.len(), 2);
        assert_eq!(faces.num_triangles(), 3);
        let zs: Vec<f64> = faces.triangles().map(|t| t.vertices[0].z).collect();
        assert_eq!(zs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_bounding_box() {
        assert!(FaceVector::new().bounding_box().is_none());

        let faces: FaceVector = vec![Face::new(0, vec![tri(-2.0), tri(3.0)])]
            .into_iter()
            .collect();
        let (min, max) = faces.bounding_box().unwrap();
        assert_eq!(min, Vertex::new(0.0, 0.0, -2.0));
        assert_eq!(max, Vertex::new(1.0, 1.0, 3.0));
    }
}
