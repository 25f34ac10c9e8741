//! Topology exploration trace.
//!
//! Walks shell -> face -> surface -> wire -> edge -> vertex and records one
//! event per element. Used while developing against new STEP files; the
//! output is for humans only.

use std::fmt;

use truck_meshalgo::prelude::*;
use truck_topology::compress::CompressedShell;

/// One element found while walking a shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ExploreEvent {
    /// A shell of the model.
    Shell {
        /// Position among converted shells.
        ordinal: usize,
        /// STEP entity id of the shell.
        entity: u64,
        /// Number of faces.
        faces: usize,
    },
    /// A face of the current shell.
    Face {
        /// Position in the shell.
        ordinal: usize,
        /// False if the face is used reversed.
        orientation: bool,
        /// Number of boundary wires.
        wires: usize,
    },
    /// The underlying surface of the current face.
    Surface {
        /// Short name of the surface type.
        kind: String,
    },
    /// A boundary wire of the current face.
    Wire {
        /// Position in the face.
        ordinal: usize,
        /// Number of edges.
        edges: usize,
    },
    /// An edge of the current wire.
    Edge {
        /// Index in the shell's edge table.
        index: usize,
        /// False if the wire traverses the edge backwards.
        orientation: bool,
    },
    /// The start vertex of the current edge, in wire direction.
    Vertex {
        /// Index in the shell's vertex table.
        index: usize,
        /// Position.
        point: [f64; 3],
    },
}

impl ExploreEvent {
    fn depth(&self) -> usize {
        match self {
            Self::Shell { .. } => 0,
            Self::Face { .. } => 1,
            Self::Surface { .. } | Self::Wire { .. } => 2,
            Self::Edge { .. } => 3,
            Self::Vertex { .. } => 4,
        }
    }
}

impl fmt::Display for ExploreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.depth() * 2)?;
        match self {
            Self::Shell {
                ordinal,
                entity,
                faces,
            } => write!(f, "shell {ordinal} (#{entity}): {faces} faces"),
            Self::Face {
                ordinal,
                orientation,
                wires,
            } => write!(
                f,
                "face {ordinal}: {wires} wires{}",
                if *orientation { "" } else { ", reversed" }
            ),
            Self::Surface { kind } => write!(f, "surface: {kind}"),
            Self::Wire { ordinal, edges } => write!(f, "wire {ordinal}: {edges} edges"),
            Self::Edge { index, orientation } => write!(
                f,
                "edge {index}{}",
                if *orientation { "" } else { " (reversed)" }
            ),
            Self::Vertex { index, point } => write!(
                f,
                "vertex {index}: ({}, {}, {})",
                point[0], point[1], point[2]
            ),
        }
    }
}

/// Append the events of one shell to `events`.
pub(crate) fn explore_shell<C, S: fmt::Debug>(
    ordinal: usize,
    entity: u64,
    shell: &CompressedShell<Point3, C, S>,
    events: &mut Vec<ExploreEvent>,
) {
    events.push(ExploreEvent::Shell {
        ordinal,
        entity,
        faces: shell.faces.len(),
    });

    for (face_ordinal, face) in shell.faces.iter().enumerate() {
        events.push(ExploreEvent::Face {
            ordinal: face_ordinal,
            orientation: face.orientation,
            wires: face.boundaries.len(),
        });
        events.push(ExploreEvent::Surface {
            kind: type_name_of(&face.surface),
        });

        for (wire_ordinal, wire) in face.boundaries.iter().enumerate() {
            events.push(ExploreEvent::Wire {
                ordinal: wire_ordinal,
                edges: wire.len(),
            });
            for edge_index in wire {
                events.push(ExploreEvent::Edge {
                    index: edge_index.index,
                    orientation: edge_index.orientation,
                });
                let Some(edge) = shell.edges.get(edge_index.index) else {
                    continue;
                };
                let (front, back) = edge.vertices;
                let start = if edge_index.orientation { front } else { back };
                if let Some(p) = shell.vertices.get(start) {
                    events.push(ExploreEvent::Vertex {
                        index: start,
                        point: [p.x, p.y, p.z],
                    });
                }
            }
        }
    }
}

/// Leading variant names of a value's debug form, e.g. `Plane` for
/// `ElementarySurface(Plane(Plane { .. }))`.
fn type_name_of<T: fmt::Debug>(value: &T) -> String {
    let debug = format!("{value:?}");
    let head = debug
        .split(|c: char| c == '{' || c == '[' || c == ',' || c == ' ')
        .next()
        .unwrap_or_default();
    let name = head
        .split('(')
        .filter(|part| !part.is_empty())
        .last()
        .unwrap_or(head);
    name.to_string()
}
