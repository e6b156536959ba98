//! The plain-text chaos game description format.
//!
//! ```text
//! Affine2D                  # Type of transform
//! 0, 0                      # min x, min y
//! 1, 1                      # max x, max y
//! 0.5, 0, 0, 0.5, 0, 0     # one affine transform per line
//! ```
//!
//! Julia descriptions carry one `re, im` constant per line instead, each
//! expanding to the +1/-1 branch pair. Anything from `#` to end of line
//! is a comment; fields are comma-separated; lines left empty after
//! comment stripping are skipped. The first line's kind keyword is
//! case-insensitive.

use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::complex::Complex;
use crate::description::ChaosGameDescription;
use crate::error::ChaosGameError;
use crate::matrix::Matrix2x2;
use crate::transforms::{AffineTransform2D, JuliaTransform, Transform2D};
use crate::vector::Vector2D;

/// Errors from reading or writing the description text format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("description ends early: missing {expected}")]
    Truncated { expected: &'static str },

    #[error("unknown transform kind {kind:?} (expected \"Affine2D\" or \"Julia\")")]
    UnknownKind { kind: String },

    #[error("line {line}: expected {expected} comma-separated values, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {source}")]
    InvalidNumber {
        line: usize,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("affine and julia transforms cannot be mixed in one description file")]
    MixedTransforms,

    #[error(transparent)]
    InvalidDescription(#[from] ChaosGameError),
}

enum TransformKind {
    Affine,
    Julia,
}

/// Parse a description from its textual form.
pub fn parse(text: &str) -> Result<ChaosGameDescription, FormatError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, strip_comment(line)))
        .filter(|(_, payload)| !payload.is_empty());

    let (_, kind_text) = lines.next().ok_or(FormatError::Truncated {
        expected: "transform kind",
    })?;
    let kind = match kind_text.to_ascii_lowercase().as_str() {
        "affine2d" => TransformKind::Affine,
        "julia" => TransformKind::Julia,
        _ => {
            return Err(FormatError::UnknownKind {
                kind: kind_text.to_string(),
            })
        }
    };

    let (line, payload) = lines.next().ok_or(FormatError::Truncated {
        expected: "min coordinates",
    })?;
    let min_coords = parse_vector(line, payload)?;

    let (line, payload) = lines.next().ok_or(FormatError::Truncated {
        expected: "max coordinates",
    })?;
    let max_coords = parse_vector(line, payload)?;

    let mut transforms = Vec::new();
    for (line, payload) in lines {
        match kind {
            TransformKind::Julia => {
                let fields = parse_fields(line, payload, 2)?;
                let constant = Complex::new(fields[0], fields[1]);
                // each constant yields both square-root branches
                transforms.push(Transform2D::Julia(julia_branch(constant, 1)));
                transforms.push(Transform2D::Julia(julia_branch(constant, -1)));
            }
            TransformKind::Affine => {
                let fields = parse_fields(line, payload, 6)?;
                transforms.push(Transform2D::Affine(AffineTransform2D::new(
                    Matrix2x2::new(fields[0], fields[1], fields[2], fields[3]),
                    Vector2D::new(fields[4], fields[5]),
                )));
            }
        }
    }

    Ok(ChaosGameDescription::new(min_coords, max_coords, transforms)?)
}

/// Render a description in its textual form.
///
/// The format can express an all-affine or an all-julia transform list;
/// a description mixing the two kinds has no representation and is
/// rejected.
pub fn serialize(description: &ChaosGameDescription) -> Result<String, FormatError> {
    let mut affines = Vec::new();
    let mut julias = Vec::new();
    for transform in description.transforms() {
        match transform {
            Transform2D::Affine(affine) => affines.push(affine),
            Transform2D::Julia(julia) => julias.push(julia),
        }
    }
    if !affines.is_empty() && !julias.is_empty() {
        return Err(FormatError::MixedTransforms);
    }

    let mut out = String::new();
    if julias.is_empty() {
        out.push_str("Affine2D # Type of transform\n");
        push_bounds(&mut out, description);
        for (index, affine) in affines.iter().enumerate() {
            out.push_str(&format!(
                "{}, {} # Affine transform nr. {}\n",
                affine.matrix(),
                affine.vector(),
                index + 1,
            ));
        }
    } else {
        // one line per constant; the -1 branch is implied by its +1 twin
        let mut constants: Vec<Complex> = julias
            .iter()
            .filter(|julia| julia.sign() == 1)
            .map(|julia| *julia.point())
            .collect();
        if constants.is_empty() {
            constants = julias.iter().map(|julia| *julia.point()).collect();
        }
        out.push_str("Julia # Type of transform\n");
        push_bounds(&mut out, description);
        for constant in &constants {
            out.push_str(&format!(
                "{}, {} # Real and imaginary parts of the constant c\n",
                constant.re(),
                constant.im(),
            ));
        }
    }
    Ok(out)
}

/// Read a description file.
pub fn read_file(path: impl AsRef<Path>) -> Result<ChaosGameDescription, FormatError> {
    let path = path.as_ref();
    debug!("reading chaos game description from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Write a description file.
pub fn write_file(
    description: &ChaosGameDescription,
    path: impl AsRef<Path>,
) -> Result<(), FormatError> {
    let path = path.as_ref();
    debug!("writing chaos game description to {}", path.display());
    let text = serialize(description)?;
    fs::write(path, text)?;
    Ok(())
}

fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((payload, _)) => payload.trim(),
        None => line.trim(),
    }
}

fn parse_vector(line: usize, payload: &str) -> Result<Vector2D, FormatError> {
    let fields = parse_fields(line, payload, 2)?;
    Ok(Vector2D::new(fields[0], fields[1]))
}

fn parse_fields(line: usize, payload: &str, expected: usize) -> Result<Vec<f64>, FormatError> {
    let raw: Vec<&str> = payload.split(',').map(str::trim).collect();
    if raw.len() != expected {
        return Err(FormatError::FieldCount {
            line,
            expected,
            found: raw.len(),
        });
    }
    raw.into_iter()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|source| FormatError::InvalidNumber { line, source })
        })
        .collect()
}

fn julia_branch(constant: Complex, sign: i32) -> JuliaTransform {
    JuliaTransform::new(constant, sign).expect("branch sign is +1 or -1")
}

fn push_bounds(out: &mut String, description: &ChaosGameDescription) {
    out.push_str(&format!("{} # min x, min y\n", description.min_coords()));
    out.push_str(&format!("{} # max x, max y\n", description.max_coords()));
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIERPINSKI_TEXT: &str = "\
Affine2D # Type of transform
0, 0 # min x, min y
1, 1 # max x, max y
0.5, 0, 0, 0.5, 0, 0
0.5, 0, 0, 0.5, 0.25, 0.5
0.5, 0, 0, 0.5, 0.5, 0
";

    const JULIA_TEXT: &str = "\
Julia # Type of transform
-1.6, -1 # min x, min y
1.6, 1 # max x, max y
-0.74543, 0.11301 # Real and imaginary parts of the constant c
";

    #[test]
    fn parses_affine_description() {
        let description = parse(SIERPINSKI_TEXT).unwrap();
        assert_eq!(*description.min_coords(), Vector2D::new(0.0, 0.0));
        assert_eq!(*description.max_coords(), Vector2D::new(1.0, 1.0));
        assert_eq!(description.transforms().len(), 3);
        match &description.transforms()[1] {
            Transform2D::Affine(affine) => {
                assert_eq!(*affine.vector(), Vector2D::new(0.25, 0.5));
            }
            Transform2D::Julia(_) => panic!("expected affine transform"),
        }
    }

    #[test]
    fn parses_julia_description_into_branch_pairs() {
        let description = parse(JULIA_TEXT).unwrap();
        assert_eq!(*description.min_coords(), Vector2D::new(-1.6, -1.0));
        assert_eq!(*description.max_coords(), Vector2D::new(1.6, 1.0));
        assert_eq!(description.transforms().len(), 2);
        let signs: Vec<i32> = description
            .transforms()
            .iter()
            .map(|transform| match transform {
                Transform2D::Julia(julia) => {
                    assert_eq!(*julia.point(), Complex::new(-0.74543, 0.11301));
                    julia.sign()
                }
                Transform2D::Affine(_) => panic!("expected julia transform"),
            })
            .collect();
        assert_eq!(signs, vec![1, -1]);
    }

    #[test]
    fn kind_keyword_is_case_insensitive() {
        let text = SIERPINSKI_TEXT.replacen("Affine2D", "AFFINE2D", 1);
        assert!(parse(&text).is_ok());
        let text = JULIA_TEXT.replacen("Julia", "julia", 1);
        assert!(parse(&text).is_ok());
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let text = "\
# a full-line comment
Affine2D

0, 0
1, 1   # trailing comment

0.5, 0, 0, 0.5, 0, 0
";
        let description = parse(text).unwrap();
        assert_eq!(description.transforms().len(), 1);
    }

    #[test]
    fn rejects_unknown_kind() {
        let result = parse("Spline\n0, 0\n1, 1\n");
        assert!(matches!(
            result.unwrap_err(),
            FormatError::UnknownKind { kind } if kind == "Spline"
        ));
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(matches!(
            parse("").unwrap_err(),
            FormatError::Truncated {
                expected: "transform kind"
            }
        ));
        assert!(matches!(
            parse("Affine2D\n0, 0\n").unwrap_err(),
            FormatError::Truncated {
                expected: "max coordinates"
            }
        ));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let result = parse("Affine2D\n0, 0\n1, 1\n0.5, 0, 0, 0.5, 0\n");
        assert!(matches!(
            result.unwrap_err(),
            FormatError::FieldCount {
                line: 4,
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn rejects_malformed_number() {
        let result = parse("Affine2D\n0, zero\n1, 1\n0.5, 0, 0, 0.5, 0, 0\n");
        assert!(matches!(
            result.unwrap_err(),
            FormatError::InvalidNumber { line: 2, .. }
        ));
    }

    #[test]
    fn rejects_description_without_transforms() {
        let result = parse("Affine2D\n0, 0\n1, 1\n");
        assert!(matches!(
            result.unwrap_err(),
            FormatError::InvalidDescription(ChaosGameError::EmptyTransforms)
        ));
    }

    #[test]
    fn serialize_rejects_mixed_transforms() {
        let mixed = ChaosGameDescription::new(
            Vector2D::new(0.0, 0.0),
            Vector2D::new(1.0, 1.0),
            vec![
                Transform2D::Affine(AffineTransform2D::new(
                    Matrix2x2::new(0.5, 0.0, 0.0, 0.5),
                    Vector2D::new(0.0, 0.0),
                )),
                Transform2D::Julia(julia_branch(Complex::new(0.0, 0.0), 1)),
            ],
        )
        .unwrap();
        assert!(matches!(
            serialize(&mixed).unwrap_err(),
            FormatError::MixedTransforms
        ));
    }

    #[test]
    fn affine_roundtrip_preserves_box_and_count() {
        let original = parse(SIERPINSKI_TEXT).unwrap();
        let text = serialize(&original).unwrap();
        let restored = parse(&text).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn julia_roundtrip_preserves_box_and_count() {
        let original = parse(JULIA_TEXT).unwrap();
        let text = serialize(&original).unwrap();
        let restored = parse(&text).unwrap();
        assert_eq!(restored, original);
    }
}
