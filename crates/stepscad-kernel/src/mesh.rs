//! Meshed shells and their per-face triangulations.

use std::io::Write;

use stepscad_tessellate::{FaceTriangulation, TriangulatedShape, Vertex};
use truck_meshalgo::prelude::*;
use truck_polymesh::stl::{self, StlType};
use truck_topology::compress::{CompressedFace, CompressedShell};

use crate::error::{KernelError, Result};

/// Default linear meshing tolerance, in source units.
pub const DEFAULT_LINEAR_TOLERANCE: f64 = 0.5;

/// A shell after triangulation: every face carries an optional mesh.
pub type MeshedShell = CompressedShell<Point3, PolylineCurve<Point3>, Option<PolygonMesh>>;

/// Meshing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshSettings {
    /// Maximum distance between the mesh and the exact surface.
    pub linear_tolerance: f64,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            linear_tolerance: DEFAULT_LINEAR_TOLERANCE,
        }
    }
}

impl MeshSettings {
    /// Settings with the given linear tolerance.
    pub fn with_tolerance(linear_tolerance: f64) -> Self {
        Self { linear_tolerance }
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.linear_tolerance.is_finite() || self.linear_tolerance <= 0.0 {
            return Err(KernelError::InvalidTolerance(self.linear_tolerance));
        }
        Ok(())
    }
}

/// Every shell of a STEP model, triangulated by the kernel.
pub struct MeshedModel {
    shells: Vec<MeshedShell>,
}

impl MeshedModel {
    pub(crate) fn new(shells: Vec<MeshedShell>) -> Self {
        Self { shells }
    }

    /// Number of shells.
    pub fn num_shells(&self) -> usize {
        self.shells.len()
    }

    /// Number of topological faces, meshed or not.
    pub fn num_faces(&self) -> usize {
        self.shells.iter().map(|s| s.faces.len()).sum()
    }

    /// Number of faces that carry a triangulation.
    pub fn num_meshed_faces(&self) -> usize {
        self.shells
            .iter()
            .flat_map(|s| s.faces.iter())
            .filter(|f| f.surface.is_some())
            .count()
    }

    /// Merge all face meshes into one kernel polygon mesh.
    ///
    /// Reversed faces are inverted by the kernel.
    pub fn to_polygon(&self) -> PolygonMesh {
        let mut merged = PolygonMesh::default();
        for shell in &self.shells {
            merged.merge(shell.to_polygon());
        }
        merged
    }

    /// Write the whole model as ASCII STL using the kernel's own writer.
    ///
    /// This is the reference output the custom exporters are checked against.
    pub fn write_stl<W: Write>(&self, writer: &mut W) -> Result<()> {
        let polygon = self.to_polygon();
        stl::write(&polygon, writer, StlType::Ascii)
            .map_err(|e| KernelError::StlWrite(e.to_string()))
    }
}

/// Borrowed view of one meshed face.
pub struct MeshedFace<'a> {
    face: &'a CompressedFace<Option<PolygonMesh>>,
}

impl FaceTriangulation for MeshedFace<'_> {
    fn nodes(&self) -> Option<Vec<Vertex>> {
        let polygon = self.face.surface.as_ref()?;
        Some(
            polygon
                .positions()
                .iter()
                .map(|p| Vertex::new(p.x, p.y, p.z))
                .collect(),
        )
    }

    fn triangles(&self) -> Vec<[usize; 3]> {
        let Some(polygon) = self.face.surface.as_ref() else {
            return Vec::new();
        };

        let mut triangles: Vec<[usize; 3]> = polygon
            .tri_faces()
            .iter()
            .map(|[a, b, c]| [a.pos, b.pos, c.pos])
            .collect();

        for [a, b, c, d] in polygon.quad_faces() {
            triangles.push([a.pos, b.pos, c.pos]);
            triangles.push([a.pos, c.pos, d.pos]);
        }

        // Remaining polygons are fanned from their first corner.
        for face in polygon.other_faces() {
            for pair in face.windows(2).skip(1) {
                triangles.push([face[0].pos, pair[0].pos, pair[1].pos]);
            }
        }
        triangles
    }

    fn is_reversed(&self) -> bool {
        !self.face.orientation
    }
}

impl TriangulatedShape for MeshedModel {
    type Face<'a> = MeshedFace<'a>;

    fn faces(&self) -> Vec<MeshedFace<'_>> {
        self.shells
            .iter()
            .flat_map(|s| s.faces.iter())
            .map(|face| MeshedFace { face })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = MeshSettings::default();
        assert_eq!(settings.linear_tolerance, 0.5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_tolerance() {
        for tol in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = MeshSettings::with_tolerance(tol).validate();
            assert!(matches!(result, Err(KernelError::InvalidTolerance(_))));
        }
    }

    #[test]
    fn test_empty_model_writes_valid_stl() {
        let model = MeshedModel::new(Vec::new());
        assert_eq!(model.num_faces(), 0);

        let mut out = Vec::new();
        model.write_stl(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("facet"));
    }
}
