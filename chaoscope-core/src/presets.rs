//! Canonical descriptions for well-known attractors.
//!
//! Every preset is a fixed bounding box and a fixed transform list; the
//! constants are literal and must not drift, since saved description
//! files and tests rely on them bit-for-bit.

use crate::complex::Complex;
use crate::description::ChaosGameDescription;
use crate::error::ChaosGameError;
use crate::matrix::Matrix2x2;
use crate::transforms::{AffineTransform2D, JuliaTransform, Transform2D};
use crate::vector::Vector2D;

/// Names accepted by [`by_name`], in presentation order.
pub const PRESET_NAMES: &[&str] = &[
    "sierpinski",
    "barnsley-fern",
    "koch-curve",
    "dragon-curve",
    "julia-1",
    "julia-2",
    "julia-3",
    "julia-4",
    "julia-5",
];

/// Look up a preset description by name.
pub fn by_name(name: &str) -> Option<ChaosGameDescription> {
    match name {
        "sierpinski" => Some(sierpinski_triangle()),
        "barnsley-fern" => Some(barnsley_fern()),
        "koch-curve" => Some(koch_curve()),
        "dragon-curve" => Some(dragon_curve()),
        "julia-1" => Some(julia_set_1()),
        "julia-2" => Some(julia_set_2()),
        "julia-3" => Some(julia_set_3()),
        "julia-4" => Some(julia_set_4()),
        "julia-5" => Some(julia_set_5()),
        _ => None,
    }
}

fn affine(a00: f64, a01: f64, a10: f64, a11: f64, v0: f64, v1: f64) -> Transform2D {
    Transform2D::Affine(AffineTransform2D::new(
        Matrix2x2::new(a00, a01, a10, a11),
        Vector2D::new(v0, v1),
    ))
}

fn description(
    min_coords: Vector2D,
    max_coords: Vector2D,
    transforms: Vec<Transform2D>,
) -> ChaosGameDescription {
    ChaosGameDescription::new(min_coords, max_coords, transforms)
        .expect("preset transform list is non-empty")
}

/// The Sierpinski triangle: three half-scale copies of the unit square.
pub fn sierpinski_triangle() -> ChaosGameDescription {
    description(
        Vector2D::new(0.0, 0.0),
        Vector2D::new(1.0, 1.0),
        vec![
            affine(0.5, 0.0, 0.0, 0.5, 0.0, 0.0),
            affine(0.5, 0.0, 0.0, 0.5, 0.25, 0.5),
            affine(0.5, 0.0, 0.0, 0.5, 0.5, 0.0),
        ],
    )
}

/// The Barnsley fern: stem, main frond and the two side leaflets.
pub fn barnsley_fern() -> ChaosGameDescription {
    description(
        Vector2D::new(-2.1820, 0.0),
        Vector2D::new(2.6558, 9.9983),
        vec![
            affine(0.0, 0.0, 0.0, 0.16, 0.0, 0.0),
            affine(0.85, 0.04, -0.04, 0.85, 0.0, 1.60),
            affine(0.20, -0.26, 0.23, 0.22, 0.0, 1.60),
            affine(-0.15, 0.28, 0.26, 0.24, 0.0, 0.44),
        ],
    )
}

/// The Koch curve as a four-map IFS.
pub fn koch_curve() -> ChaosGameDescription {
    description(
        Vector2D::new(-0.5, -0.5),
        Vector2D::new(1.5, 1.5),
        vec![
            affine(0.3333, 0.0, 0.0, 0.3333, 0.0, 0.0),
            affine(0.3333, 0.0, 0.0, 0.3333, 0.3333, 0.0),
            affine(0.16667, 0.288675, -0.288675, 0.16667, 0.5, 0.288675),
            affine(0.3333, 0.0, 0.0, 0.3333, 0.66667, 0.0),
        ],
    )
}

/// The Heighway dragon curve.
pub fn dragon_curve() -> ChaosGameDescription {
    description(
        Vector2D::new(-1.0, -1.0),
        Vector2D::new(1.0, 1.0),
        vec![
            affine(0.5, -0.5, 0.5, 0.5, 0.0, 0.0),
            affine(0.5, 0.5, -0.5, 0.5, 0.5, 0.0),
        ],
    )
}

/// Julia set for c = -0.4 + 0.6i.
pub fn julia_set_1() -> ChaosGameDescription {
    julia_preset(Complex::new(-0.4, 0.6))
}

/// Julia set for c = -0.8 + 0.156i.
pub fn julia_set_2() -> ChaosGameDescription {
    julia_preset(Complex::new(-0.8, 0.156))
}

/// Julia set for c = -0.70176 - 0.3842i.
pub fn julia_set_3() -> ChaosGameDescription {
    julia_preset(Complex::new(-0.70176, -0.3842))
}

/// Julia set for c = -0.835 - 0.2321i.
pub fn julia_set_4() -> ChaosGameDescription {
    julia_preset(Complex::new(-0.835, -0.2321))
}

/// Julia set for c = -0.74543 + 0.11301i.
pub fn julia_set_5() -> ChaosGameDescription {
    julia_preset(Complex::new(-0.74543, 0.11301))
}

// All named Julia presets share the same window.
fn julia_preset(constant: Complex) -> ChaosGameDescription {
    custom_julia(
        Vector2D::new(-1.6, -1.0),
        Vector2D::new(1.6, 1.0),
        constant,
    )
}

/// Description over an arbitrary affine transform list.
pub fn custom_affine(
    min_coords: Vector2D,
    max_coords: Vector2D,
    transforms: Vec<AffineTransform2D>,
) -> Result<ChaosGameDescription, ChaosGameError> {
    ChaosGameDescription::new(
        min_coords,
        max_coords,
        transforms.into_iter().map(Transform2D::Affine).collect(),
    )
}

/// Description for one Julia constant: the +1 and -1 square-root branches
/// over the given window.
pub fn custom_julia(
    min_coords: Vector2D,
    max_coords: Vector2D,
    constant: Complex,
) -> ChaosGameDescription {
    let plus = JuliaTransform::new(constant, 1).expect("+1 is a valid branch sign");
    let minus = JuliaTransform::new(constant, -1).expect("-1 is a valid branch sign");
    description(
        min_coords,
        max_coords,
        vec![Transform2D::Julia(plus), Transform2D::Julia(minus)],
    )
}
