//! The transform variants driven by the chaos game.

use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::ChaosGameError;
use crate::matrix::Matrix2x2;
use crate::vector::Vector2D;

/// An affine map `p -> A*p + b` in description space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform2D {
    matrix: Matrix2x2,
    vector: Vector2D,
}

impl AffineTransform2D {
    pub fn new(matrix: Matrix2x2, vector: Vector2D) -> Self {
        Self { matrix, vector }
    }

    pub fn matrix(&self) -> &Matrix2x2 {
        &self.matrix
    }

    pub fn vector(&self) -> &Vector2D {
        &self.vector
    }

    /// Apply the map: multiply by the matrix, then translate.
    pub fn transform(&self, point: &Vector2D) -> Vector2D {
        self.matrix.multiply(point).add(&self.vector)
    }
}

/// The complex square-root map `z -> sign * sqrt(z - c)`.
///
/// The +1 and -1 branches together invert `z -> z^2 + c`, which is what
/// makes the pair usable as an IFS for Julia-set attractors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JuliaTransform {
    point: Complex,
    sign: i32,
}

impl JuliaTransform {
    /// Build one branch of the map. `sign` must be exactly +1 or -1.
    pub fn new(point: Complex, sign: i32) -> Result<Self, ChaosGameError> {
        if sign != 1 && sign != -1 {
            return Err(ChaosGameError::InvalidSign(sign));
        }
        Ok(Self { point, sign })
    }

    pub fn point(&self) -> &Complex {
        &self.point
    }

    pub fn sign(&self) -> i32 {
        self.sign
    }

    /// Apply the map: shift by the constant, take the principal square
    /// root, scale both components by the branch sign.
    ///
    /// When `z - c` lands exactly on the real axis, [`Complex::sqrt`]'s
    /// `sign(0) = 0` convention zeroes the imaginary component no matter
    /// which branch was requested. Kept as the formula dictates.
    pub fn transform(&self, point: &Vector2D) -> Vector2D {
        let shifted = Complex::from(point.subtract(&Vector2D::from(self.point)));
        let root = shifted.sqrt();
        let sign = f64::from(self.sign);
        Vector2D::new(sign * root.re(), sign * root.im())
    }
}

/// A chaos-game transform: one of the two concrete map kinds.
///
/// A closed sum type rather than a trait object: the description format
/// and the preset catalogue only ever produce these two variants, and the
/// iteration loop dispatches on them per step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transform2D {
    Affine(AffineTransform2D),
    Julia(JuliaTransform),
}

impl Transform2D {
    /// Apply the underlying map to a point.
    pub fn transform(&self, point: &Vector2D) -> Vector2D {
        match self {
            Transform2D::Affine(affine) => affine.transform(point),
            Transform2D::Julia(julia) => julia.transform(point),
        }
    }
}

impl From<AffineTransform2D> for Transform2D {
    fn from(affine: AffineTransform2D) -> Self {
        Transform2D::Affine(affine)
    }
}

impl From<JuliaTransform> for Transform2D {
    fn from(julia: JuliaTransform) -> Self {
        Transform2D::Julia(julia)
    }
}
