//! OpenSCAD export.
//!
//! Triangles are written as `polyhedron()` calls. Every triangle gets three
//! fresh points; shared vertices are not merged. OpenSCAD expects faces
//! ordered clockwise when seen from outside, the reverse of STL, so each
//! index triple is emitted as `[i, i + 2, i + 1]`.

use std::io::{self, Write};

use stepscad_tessellate::{FaceVector, Triangle};

use crate::palette::face_color;

/// Leading text before the first entry, and separator between entries.
type Layout = (&'static str, &'static str);

/// One entry per line, indented.
const BLOCK: Layout = ("\n  ", ",\n  ");

/// All entries on one line.
const INLINE: Layout = ("", ", ");

/// Write all triangles as a single `polyhedron()`.
///
/// `source` names the input file in the header comment.
pub fn write_scad_polyhedron<W: Write>(
    faces: &FaceVector,
    source: Option<&str>,
    writer: &mut W,
) -> io::Result<()> {
    write_header(writer, source)?;

    write!(writer, "points = [")?;
    write_points(writer, faces.triangles(), BLOCK)?;
    writeln!(writer, "\n];")?;

    write!(writer, "faces = [")?;
    write_indices(writer, faces.num_triangles(), BLOCK)?;
    writeln!(writer, "\n];")?;

    writeln!(writer, "polyhedron(points = points, faces = faces);")?;
    Ok(())
}

/// Write one colored `polyhedron()` per face.
///
/// The color of a face depends only on its position in `faces`.
pub fn write_scad_faces<W: Write>(
    faces: &FaceVector,
    source: Option<&str>,
    writer: &mut W,
) -> io::Result<()> {
    write_header(writer, source)?;

    for (n, face) in faces.faces().iter().enumerate() {
        writeln!(writer)?;
        writeln!(writer, "// face {n} (source face {})", face.index())?;
        writeln!(writer, "color({}) polyhedron(", face_color(n))?;
        write!(writer, "  points = [")?;
        write_points(writer, face.triangles().iter(), INLINE)?;
        writeln!(writer, "],")?;
        write!(writer, "  faces = [")?;
        write_indices(writer, face.num_triangles(), INLINE)?;
        writeln!(writer, "]);")?;
    }
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, source: Option<&str>) -> io::Result<()> {
    match source {
        Some(name) => {
            // Control characters would end the comment and leak into source.
            let name: String = name
                .chars()
                .map(|c| if c.is_control() { '?' } else { c })
                .collect();
            writeln!(writer, "// Generated by stepscad from {name}")
        }
        None => writeln!(writer, "// Generated by stepscad"),
    }
}

/// Point list body, `[x, y, z]` per vertex.
fn write_points<'a, W: Write>(
    writer: &mut W,
    triangles: impl Iterator<Item = &'a Triangle>,
    (lead, sep): Layout,
) -> io::Result<()> {
    let mut first = true;
    for tri in triangles {
        for v in &tri.vertices {
            let prefix = if first { lead } else { sep };
            write!(writer, "{prefix}[{}, {}, {}]", v.x, v.y, v.z)?;
            first = false;
        }
    }
    Ok(())
}

/// Face list body for `count` triangles laid out by [`write_points`].
fn write_indices<W: Write>(writer: &mut W, count: usize, (lead, sep): Layout) -> io::Result<()> {
    for t in 0..count {
        let i = t * 3;
        let prefix = if t == 0 { lead } else { sep };
        write!(writer, "{prefix}[{}, {}, {}]", i, i + 2, i + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepscad_tessellate::{Face, Vertex};

    fn tri(x: f64) -> Triangle {
        Triangle::new(
            Vertex::new(x, 0.0, 0.0),
            Vertex::new(x + 1.0, 0.0, 0.0),
            Vertex::new(x, 1.0, 0.5),
        )
    }

    fn sample() -> FaceVector {
        vec![
            Face::new(0, vec![tri(0.0), tri(1.0)]),
            Face::new(3, vec![tri(5.0)]),
        ]
        .into_iter()
        .collect()
    }

    fn render<F>(write: F, faces: &FaceVector) -> String
    where
        F: Fn(&FaceVector, Option<&str>, &mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        write(faces, Some("part.step"), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Triangles recovered from `[x, y, z]` / `[i, j, k]` vector text.
    fn parse_triangles(points: &str, faces: &str) -> Vec<[[f64; 3]; 3]> {
        let triples = |s: &str| -> Vec<Vec<f64>> {
            s.split('[')
                .filter_map(|chunk| chunk.split(']').next())
                .filter(|chunk| !chunk.trim().is_empty())
                .map(|chunk| {
                    chunk
                        .split(',')
                        .map(|n| n.trim().parse::<f64>().unwrap())
                        .collect()
                })
                .collect()
        };
        let points = triples(points);
        triples(faces)
            .iter()
            .map(|f| {
                let p = |k: usize| {
                    let v = &points[f[k] as usize];
                    [v[0], v[1], v[2]]
                };
                [p(0), p(1), p(2)]
            })
            .collect()
    }

    fn section<'a>(text: &'a str, start: &str) -> &'a str {
        let from = text.find(start).unwrap() + start.len();
        let len = text[from..].find("];").unwrap();
        &text[from..from + len]
    }

    #[test]
    fn test_polyhedron_layout() {
        let text = render(write_scad_polyhedron::<Vec<u8>>, &sample());

        assert!(text.starts_with("// Generated by stepscad from part.step\n"));
        assert!(text.contains("points = [\n  [0, 0, 0],\n  [1, 0, 0],\n  [0, 1, 0.5],\n"));
        assert!(text.contains("faces = [\n  [0, 2, 1],\n  [3, 5, 4],\n  [6, 8, 7]\n];"));
        assert!(text.ends_with("polyhedron(points = points, faces = faces);\n"));
        assert_eq!(text.matches("polyhedron(").count(), 1);
    }

    #[test]
    fn test_polyhedron_holds_same_triangles_reversed() {
        let faces = sample();
        let text = render(write_scad_polyhedron::<Vec<u8>>, &faces);
        let parsed = parse_triangles(section(&text, "points = ["), section(&text, "faces = ["));

        let expected: Vec<[[f64; 3]; 3]> = faces
            .triangles()
            .map(|t| t.reversed().vertices.map(|v| [v.x, v.y, v.z]))
            .collect();
        assert_eq!(parsed.len(), 3);
        for (got, want) in parsed.iter().zip(&expected) {
            // Same triangle, same clockwise cycle, possibly rotated.
            assert!((0..3).any(|r| {
                let mut rotated = *got;
                rotated.rotate_left(r);
                rotated == *want
            }));
        }
    }

    #[test]
    fn test_polyhedron_empty() {
        let text = render(write_scad_polyhedron::<Vec<u8>>, &FaceVector::new());
        assert_eq!(
            text,
            "// Generated by stepscad from part.step\n\
             points = [\n];\n\
             faces = [\n];\n\
             polyhedron(points = points, faces = faces);\n"
        );
    }

    #[test]
    fn test_faces_one_block_per_face() {
        let faces = sample();
        let text = render(write_scad_faces::<Vec<u8>>, &faces);

        assert_eq!(text.matches("polyhedron(").count(), faces.len());
        assert_eq!(text.matches("color(").count(), faces.len());
        assert!(text.contains("// face 0 (source face 0)"));
        assert!(text.contains("// face 1 (source face 3)"));
        assert!(text.contains(&format!("color({}) polyhedron(", face_color(1))));
        assert!(text.contains("  faces = [[0, 2, 1], [3, 5, 4]]);"));
        assert!(text.contains("  faces = [[0, 2, 1]]);"));
    }

    #[test]
    fn test_faces_deterministic() {
        let faces = sample();
        let first = render(write_scad_faces::<Vec<u8>>, &faces);
        let second = render(write_scad_faces::<Vec<u8>>, &faces);
        assert_eq!(first, second);
    }

    #[test]
    fn test_faces_empty() {
        let text = render(write_scad_faces::<Vec<u8>>, &FaceVector::new());
        assert_eq!(text, "// Generated by stepscad from part.step\n");
    }

    #[test]
    fn test_header_hides_control_characters() {
        let mut out = Vec::new();
        write_scad_faces(&FaceVector::new(), Some("a\ncube();\r.step"), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "// Generated by stepscad from a?cube();?.step\n"
        );
    }

    #[test]
    fn test_header_without_source() {
        let mut out = Vec::new();
        write_scad_faces(&FaceVector::new(), None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "// Generated by stepscad\n");
    }
}
