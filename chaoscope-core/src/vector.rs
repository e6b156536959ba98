use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D vector (or point) in description space.
///
/// Immutable value type: arithmetic returns new vectors, equality is
/// component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    x0: f64,
    x1: f64,
}

impl Vector2D {
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Vector2D) -> Vector2D {
        Vector2D::new(self.x0 + other.x0, self.x1 + other.x1)
    }

    /// Component-wise difference.
    pub fn subtract(&self, other: &Vector2D) -> Vector2D {
        Vector2D::new(self.x0 - other.x0, self.x1 - other.x1)
    }
}

/// Renders as `x0, x1`, the field shape used by the description text
/// format.
impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x0, self.x1)
    }
}
