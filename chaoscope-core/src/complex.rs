use serde::{Deserialize, Serialize};

use crate::vector::Vector2D;

/// A complex number as a (re, im) pair.
///
/// Carries only what the Julia transform needs: conversion to and from
/// [`Vector2D`] and the principal-branch square root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    re: f64,
    im: f64,
}

/// Signum with the convention `sign(0) = 0`.
///
/// `f64::signum` maps 0.0 to 1.0, which would pick a branch for purely
/// real inputs; the square-root formula below wants the zero-collapsing
/// convention instead.
fn signum_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    /// Principal-branch square root.
    ///
    /// With `m = |z|`:
    ///
    /// ```text
    /// sqrt(z) = ( sqrt((m + re) / 2), sign(im) * sqrt((m - re) / 2) )
    /// ```
    ///
    /// where `sign(0) = 0`. For inputs on the real axis the imaginary
    /// component therefore collapses to 0, even for negative reals where
    /// a complex root exists. The Julia transform inherits this behavior
    /// deliberately.
    pub fn sqrt(&self) -> Complex {
        let m = (self.re * self.re + self.im * self.im).sqrt();
        Complex::new(
            ((m + self.re) / 2.0).sqrt(),
            signum_zero(self.im) * ((m - self.re) / 2.0).sqrt(),
        )
    }
}

impl From<Vector2D> for Complex {
    fn from(v: Vector2D) -> Self {
        Complex::new(v.x0(), v.x1())
    }
}

impl From<Complex> for Vector2D {
    fn from(z: Complex) -> Self {
        Vector2D::new(z.re, z.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn sqrt_of_3_plus_4i_is_exactly_2_plus_i() {
        let root = Complex::new(3.0, 4.0).sqrt();
        assert_eq!(root, Complex::new(2.0, 1.0));
    }

    #[test]
    fn sqrt_of_1_plus_2i() {
        let root = Complex::new(1.0, 2.0).sqrt();
        assert!((root.re() - 1.272019649514069).abs() < TOLERANCE);
        assert!((root.im() - 0.7861513777574233).abs() < TOLERANCE);
    }

    #[test]
    fn sqrt_of_zero_is_zero() {
        assert_eq!(Complex::new(0.0, 0.0).sqrt(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn sqrt_of_positive_real_stays_real() {
        let root = Complex::new(9.0, 0.0).sqrt();
        assert_eq!(root, Complex::new(3.0, 0.0));
    }

    #[test]
    fn sqrt_of_negative_real_collapses_to_zero() {
        // sign(0) = 0 zeroes the imaginary part, so the complex root of a
        // negative real is NOT produced. This is the documented convention
        // of the iteration formula, kept as-is.
        let root = Complex::new(-4.0, 0.0).sqrt();
        assert_eq!(root, Complex::new(0.0, 0.0));
    }

    #[test]
    fn sqrt_with_negative_imaginary_picks_lower_half_plane() {
        let root = Complex::new(3.0, -4.0).sqrt();
        assert_eq!(root, Complex::new(2.0, -1.0));
    }

    #[test]
    fn conversion_roundtrip_with_vector() {
        let z = Complex::new(-0.4, 0.6);
        let v = Vector2D::from(z);
        assert_eq!(v, Vector2D::new(-0.4, 0.6));
        assert_eq!(Complex::from(v), z);
    }

    #[test]
    fn nan_input_propagates() {
        let root = Complex::new(f64::NAN, 1.0).sqrt();
        assert!(root.re().is_nan());
    }

    #[test]
    fn serialization_roundtrip() {
        let original = Complex::new(-0.70176, -0.3842);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
