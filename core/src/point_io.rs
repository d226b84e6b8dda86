//! Point cloud export

use crate::emitter::*;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType, ScalarType,
};
use ply_rs::writer::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Name of the PLY element holding the points.
const VERTEX: &str = "vertex";

/// Builds an ASCII PLY document with one vertex per point.
///
/// * `points` - The points.
fn build_ply(points: &[PointVertex]) -> Result<Ply<DefaultElement>, String> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;
    ply.header.comments.push("holofract point cloud".to_string());

    let mut vertex = ElementDef::new(VERTEX.to_string());
    for name in ["x", "y", "z"] {
        vertex
            .properties
            .add(PropertyDef::new(name.to_string(), PropertyType::Scalar(ScalarType::Float)));
    }
    for name in ["red", "green", "blue"] {
        vertex
            .properties
            .add(PropertyDef::new(name.to_string(), PropertyType::Scalar(ScalarType::UChar)));
    }
    ply.header.elements.add(vertex);

    let payload: Vec<DefaultElement> = points
        .iter()
        .map(|p| {
            let mut e = DefaultElement::new();
            e.insert("x".to_string(), Property::Float(p.position.x));
            e.insert("y".to_string(), Property::Float(p.position.y));
            e.insert("z".to_string(), Property::Float(p.position.z));
            e.insert("red".to_string(), Property::UChar(p.color.r()));
            e.insert("green".to_string(), Property::UChar(p.color.g()));
            e.insert("blue".to_string(), Property::UChar(p.color.b()));
            e
        })
        .collect();
    ply.payload.insert(VERTEX.to_string(), payload);

    ply.make_consistent()
        .map_err(|e| format!("Inconsistent PLY document: {:?}", e))?;
    Ok(ply)
}

/// Writes points as an ASCII PLY document and returns the number of bytes
/// written.
///
/// * `out`    - The output stream.
/// * `points` - The points.
pub fn write_points<W: Write>(out: &mut W, points: &[PointVertex]) -> Result<usize, String> {
    let mut ply = build_ply(points)?;
    Writer::new()
        .write_ply(out, &mut ply)
        .map_err(|e| format!("Error writing PLY: {}", e))
}

/// Writes points to a PLY file.
///
/// * `path`   - The output path.
/// * `points` - The points.
pub fn write_ply_file(path: &str, points: &[PointVertex]) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Error creating '{}': {}", path, e))?;
    let mut out = BufWriter::new(file);
    let bytes = write_points(&mut out, points)?;
    out.flush().map_err(|e| format!("Error writing '{}': {}", path, e))?;
    info!("Wrote {} points ({} bytes) to '{}'", points.len(), bytes, path);
    Ok(())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::*;
    use crate::geometry::*;
    use float_cmp::approx_eq;
    use ply_rs::parser::Parser;

    fn float(e: &DefaultElement, key: &str) -> f32 {
        match e.get(key) {
            Some(Property::Float(v)) => *v,
            other => panic!("unexpected property {:?} for '{}'", other, key),
        }
    }

    fn uchar(e: &DefaultElement, key: &str) -> u8 {
        match e.get(key) {
            Some(Property::UChar(v)) => *v,
            other => panic!("unexpected property {:?} for '{}'", other, key),
        }
    }

    #[test]
    fn written_points_parse_back() {
        let points = vec![
            PointVertex::new(Point3f::new(0.25, -0.5, 0.125), Rgb::new(0x12_34_56)),
            PointVertex::new(Point3f::new(-1.0, 1.0, 0.0), Rgb::WHITE),
        ];

        let mut buf = Vec::new();
        let bytes = write_points(&mut buf, &points).unwrap();
        assert_eq!(bytes, buf.len());

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("ply\n"));
        assert!(text.contains("format ascii 1.0"));
        assert!(text.contains("element vertex 2"));

        let ply = Parser::<DefaultElement>::new().read_ply(&mut buf.as_slice()).unwrap();
        let vertices = &ply.payload[VERTEX];
        assert_eq!(vertices.len(), 2);

        let v = &vertices[0];
        assert!(approx_eq!(f32, float(v, "x"), 0.25));
        assert!(approx_eq!(f32, float(v, "y"), -0.5));
        assert!(approx_eq!(f32, float(v, "z"), 0.125));
        assert_eq!(uchar(v, "red"), 0x12);
        assert_eq!(uchar(v, "green"), 0x34);
        assert_eq!(uchar(v, "blue"), 0x56);

        let v = &vertices[1];
        assert!(approx_eq!(f32, float(v, "x"), -1.0));
        assert_eq!(uchar(v, "blue"), 0xff);
    }

    #[test]
    fn empty_cloud_has_header_only() {
        let mut buf = Vec::new();
        write_points(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("element vertex 0"));
        assert!(text.trim_end().ends_with("end_header"));
    }
}
