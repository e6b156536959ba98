use serde::{Deserialize, Serialize};

use crate::error::ChaosGameError;
use crate::transforms::Transform2D;
use crate::vector::Vector2D;

/// Everything needed to run one chaos game: the window onto description
/// space and the ordered, non-empty transform list.
///
/// The corner vectors are stored exactly as given and never normalized; an
/// inverted window simply mirrors the rendered image. A window that
/// collapses on an axis is only rejected once a canvas is built over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaosGameDescription {
    min_coords: Vector2D,
    max_coords: Vector2D,
    transforms: Vec<Transform2D>,
}

impl ChaosGameDescription {
    /// Build a description.
    ///
    /// The transform list must be non-empty: an empty list would make the
    /// uniform transform choice in the game loop undefined, so it is
    /// rejected here rather than at iteration time.
    pub fn new(
        min_coords: Vector2D,
        max_coords: Vector2D,
        transforms: Vec<Transform2D>,
    ) -> Result<Self, ChaosGameError> {
        if transforms.is_empty() {
            return Err(ChaosGameError::EmptyTransforms);
        }
        Ok(Self {
            min_coords,
            max_coords,
            transforms,
        })
    }

    pub fn min_coords(&self) -> &Vector2D {
        &self.min_coords
    }

    pub fn max_coords(&self) -> &Vector2D {
        &self.max_coords
    }

    pub fn transforms(&self) -> &[Transform2D] {
        &self.transforms
    }
}
