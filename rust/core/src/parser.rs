// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ parser using nom
//!
//! Line-oriented: every line is tokenized into a [`Directive`] and then folded
//! into an [`ObjDocument`]. Only geometry that matters for mass properties is
//! kept (vertex positions, polygons, object boundaries).

use nom::{
    bytes::complete::{take_till, take_till1, take_while1},
    character::complete::{char, digit1, one_of, space0, space1},
    combinator::{all_consuming, map, map_res, opt, recognize, verify},
    multi::{many0, separated_list1},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use smallvec::SmallVec;

use crate::document::{FaceIndices, ObjDocument, ObjObject};
use crate::error::{Error, Result};

/// Name given to faces that appear before the first `o` directive.
pub const DEFAULT_OBJECT_NAME: &str = "default";

/// A single parsed OBJ line
#[derive(Debug, Clone, PartialEq)]
pub enum Directive<'a> {
    /// `v x y z [w | r g b]`
    Vertex([f64; 3]),
    /// `f a b c ...` with raw (1-based or negative) indices
    Face(SmallVec<[i64; 4]>),
    /// `o name`
    Object(&'a str),
    /// Any directive without a bearing on geometry (`vt`, `vn`, `g`, `usemtl`, ...)
    Ignored,
}

/// Parse a finite floating point number: 1, -1.5, 2.5e-3, .5
///
/// Values that overflow to infinity (`1e999`) are rejected.
fn number(input: &str) -> IResult<&str, f64> {
    verify(
        map_res(
            take_while1(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')),
            |s: &str| fast_float::parse::<f64, _>(s),
        ),
        |v: &f64| v.is_finite(),
    )(input)
}

/// Parse a signed integer: 3, -1
fn signed_index(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

/// Parse one face vertex reference: `i`, `i/t`, `i//n`, `i/t/n`
fn face_ref(input: &str) -> IResult<&str, i64> {
    terminated(
        signed_index,
        opt(preceded(char('/'), take_till(|c: char| c.is_whitespace()))),
    )(input)
}

/// Vertex coordinates. Trailing values (`w`, or the `r g b` vertex colours
/// some exporters write) are dropped.
fn vertex_coords(input: &str) -> IResult<&str, [f64; 3]> {
    map(
        terminated(
            tuple((
                number,
                preceded(space1, number),
                preceded(space1, number),
                many0(preceded(space1, number)),
            )),
            space0,
        ),
        |(x, y, z, _extra)| [x, y, z],
    )(input)
}

fn face_refs(input: &str) -> IResult<&str, SmallVec<[i64; 4]>> {
    map(
        terminated(separated_list1(space1, face_ref), space0),
        |refs| refs.into_iter().collect(),
    )(input)
}

/// Parse a single directive. `line` must already be stripped of comments and
/// surrounding whitespace.
pub fn parse_directive(line: &str) -> IResult<&str, Directive<'_>> {
    let (rest, keyword) = terminated(take_till1(|c: char| c.is_whitespace()), space0)(line)?;
    match keyword {
        "v" => all_consuming(map(vertex_coords, Directive::Vertex))(rest),
        "f" => all_consuming(map(face_refs, Directive::Face))(rest),
        "o" => Ok(("", Directive::Object(rest.trim()))),
        _ => Ok(("", Directive::Ignored)),
    }
}

/// Resolve a raw OBJ index against the number of vertices seen so far.
fn resolve_index(raw: i64, vertex_count: usize, line: usize) -> Result<usize> {
    let count = vertex_count as i64;
    let resolved = if raw > 0 { raw - 1 } else { count + raw };
    if raw == 0 || resolved < 0 || resolved >= count {
        return Err(Error::IndexOutOfRange { line, index: raw });
    }
    Ok(resolved as usize)
}

/// Parse a complete OBJ document.
///
/// # Example
///
/// ```
/// use hullmass_core::parse_obj;
///
/// let doc = parse_obj("o plate\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
/// assert_eq!(doc.object_count(), 1);
/// assert_eq!(doc.objects[0].name, "plate");
/// ```
pub fn parse_obj(input: &str) -> Result<ObjDocument> {
    let mut doc = ObjDocument::new();
    let mut current = ObjObject::new(DEFAULT_OBJECT_NAME);

    for (i, raw_line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let (_, directive) = parse_directive(line).map_err(|_| Error::Parse {
            line: line_no,
            message: format!("malformed directive `{}`", line),
        })?;

        match directive {
            Directive::Vertex(v) => doc.vertices.push(v),
            Directive::Face(refs) => {
                if refs.len() < 3 {
                    return Err(Error::DegenerateFace {
                        line: line_no,
                        count: refs.len(),
                    });
                }
                let face = refs
                    .iter()
                    .map(|&r| resolve_index(r, doc.vertices.len(), line_no))
                    .collect::<Result<FaceIndices>>()?;
                current.faces.push(face);
            }
            Directive::Object(name) => {
                let name = if name.is_empty() {
                    format!("object{}", doc.objects.len() + 1)
                } else {
                    name.to_string()
                };
                let finished = std::mem::replace(&mut current, ObjObject::new(name));
                if !finished.faces.is_empty() {
                    doc.objects.push(finished);
                }
            }
            Directive::Ignored => {}
        }
    }

    if !current.faces.is_empty() {
        doc.objects.push(current);
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number("1.5").unwrap().1, 1.5);
        assert_eq!(number("-2").unwrap().1, -2.0);
        assert_eq!(number("2.5e-3").unwrap().1, 2.5e-3);
        assert!(number("abc").is_err());
        assert!(number("1e999").is_err());
        assert!(number("-1e400").is_err());
    }

    #[test]
    fn test_face_ref_forms() {
        assert_eq!(face_ref("3").unwrap().1, 3);
        assert_eq!(face_ref("3/7").unwrap().1, 3);
        assert_eq!(face_ref("3//2").unwrap().1, 3);
        assert_eq!(face_ref("-1/4/2").unwrap().1, -1);
    }

    #[test]
    fn test_directives() {
        assert_eq!(
            parse_directive("v 1 2 3").unwrap().1,
            Directive::Vertex([1.0, 2.0, 3.0])
        );
        assert_eq!(
            parse_directive("v 1 2 3 1.0").unwrap().1,
            Directive::Vertex([1.0, 2.0, 3.0])
        );
        assert_eq!(parse_directive("o keel").unwrap().1, Directive::Object("keel"));
        assert_eq!(parse_directive("vn 0 0 1").unwrap().1, Directive::Ignored);
        assert_eq!(parse_directive("usemtl hull").unwrap().1, Directive::Ignored);
        assert_eq!(
            parse_directive("v 1 2 3 0.8 0.2 0.1").unwrap().1,
            Directive::Vertex([1.0, 2.0, 3.0])
        );
        assert!(parse_directive("v 1 2").is_err());
        assert!(parse_directive("f 1 2 x").is_err());
    }

    #[test]
    fn test_parse_quad_with_normals() {
        let src = "\
# exported quad
o deck
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1 4//1
";
        let doc = parse_obj(src).unwrap();
        assert_eq!(doc.vertices.len(), 4);
        assert_eq!(doc.objects.len(), 1);
        assert_eq!(doc.objects[0].faces[0].as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_negative_indices_are_relative() {
        let doc = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n").unwrap();
        assert_eq!(doc.objects[0].name, DEFAULT_OBJECT_NAME);
        assert_eq!(doc.objects[0].faces[0].as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_multiple_objects_and_empty_objects_dropped() {
        let src = "\
o empty
o a
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o b
v 0 0 1
f 1 2 4
";
        let doc = parse_obj(src).unwrap();
        let names: Vec<_> = doc.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { line: 3, index: 3 });

        let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert_eq!(err, Error::DegenerateFace { line: 3, count: 2 });

        let err = parse_obj("v 0 0 0\nf 0 1 1\n").unwrap_err();
        assert_eq!(err.line(), 2);

        let err = parse_obj("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_overflowing_coordinate_is_rejected() {
        let err = parse_obj("v 0 0 0\nv 1e999 0 0\nv 0 1 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_vertex_colors_are_ignored() {
        let src = "\
v 0 0 0 1 0 0
v 1 0 0 0 1 0
v 0 1 0 0 0 1
f 1 2 3
";
        let doc = parse_obj(src).unwrap();
        assert_eq!(doc.vertices[1], [1.0, 0.0, 0.0]);
        assert_eq!(doc.face_count(), 1);
    }

    #[test]
    fn test_trailing_comment_is_stripped() {
        let doc = parse_obj("v 0 0 0 # origin\nv 1 0 0\nv 0 1 0\nf 1 2 3 # tri\n").unwrap();
        assert_eq!(doc.face_count(), 1);
    }
}
