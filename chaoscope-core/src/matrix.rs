use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vector::Vector2D;

/// A 2x2 real matrix: the linear part of an affine map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    a00: f64,
    a01: f64,
    a10: f64,
    a11: f64,
}

impl Matrix2x2 {
    /// Row-major construction: `[[a00, a01], [a10, a11]]`.
    pub fn new(a00: f64, a01: f64, a10: f64, a11: f64) -> Self {
        Self { a00, a01, a10, a11 }
    }

    pub fn a00(&self) -> f64 {
        self.a00
    }

    pub fn a01(&self) -> f64 {
        self.a01
    }

    pub fn a10(&self) -> f64 {
        self.a10
    }

    pub fn a11(&self) -> f64 {
        self.a11
    }

    /// Matrix-vector product.
    pub fn multiply(&self, vector: &Vector2D) -> Vector2D {
        Vector2D::new(
            self.a00 * vector.x0() + self.a01 * vector.x1(),
            self.a10 * vector.x0() + self.a11 * vector.x1(),
        )
    }
}

/// Renders as `a00, a01, a10, a11`, the field shape used by the
/// description text format.
impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.a00, self.a01, self.a10, self.a11)
    }
}
