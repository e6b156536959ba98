//! The discrete accumulation canvas and its coordinate mapping.

use crate::error::ChaosGameError;
use crate::matrix::Matrix2x2;
use crate::transforms::AffineTransform2D;
use crate::vector::Vector2D;

/// A `width x height` grid of visited/unvisited cells plus the affine map
/// from description-space coordinates to grid indices.
///
/// The map is derived once at construction and stays fixed for the
/// canvas's lifetime; rendering a different window means building a new
/// canvas. Cells are stored row-major, `height` rows of `width` columns,
/// row 0 at the top of the window (maximum y).
#[derive(Debug, Clone)]
pub struct ChaosCanvas {
    width: u32,
    height: u32,
    min_coords: Vector2D,
    max_coords: Vector2D,
    cells: Vec<u8>,
    coords_to_indices: AffineTransform2D,
}

impl ChaosCanvas {
    /// Create an empty canvas over the given window.
    ///
    /// Fails when a dimension is zero or when the window collapses on an
    /// axis; either would make the index derivation divide by zero.
    pub fn new(
        width: u32,
        height: u32,
        min_coords: Vector2D,
        max_coords: Vector2D,
    ) -> Result<Self, ChaosGameError> {
        if width == 0 || height == 0 {
            return Err(ChaosGameError::EmptyCanvas { width, height });
        }
        if min_coords.x0() == max_coords.x0() {
            return Err(ChaosGameError::DegenerateBounds("x"));
        }
        if min_coords.x1() == max_coords.x1() {
            return Err(ChaosGameError::DegenerateBounds("y"));
        }
        let coords_to_indices = derive_indices_transform(width, height, &min_coords, &max_coords);
        Ok(Self {
            width,
            height,
            min_coords,
            max_coords,
            cells: vec![0; width as usize * height as usize],
            coords_to_indices,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn min_coords(&self) -> &Vector2D {
        &self.min_coords
    }

    pub fn max_coords(&self) -> &Vector2D {
        &self.max_coords
    }

    /// The derived description-space to (row, col) map.
    pub fn coords_to_indices(&self) -> &AffineTransform2D {
        &self.coords_to_indices
    }

    /// Cell value under the given description-space point: 1 if visited,
    /// 0 if not. Points mapping outside the grid read as unvisited.
    pub fn get_pixel(&self, point: &Vector2D) -> u8 {
        match self.indices_of(point) {
            Some((row, col)) => self.cells[row * self.width as usize + col],
            None => 0,
        }
    }

    /// Mark the cell under the given point as visited.
    ///
    /// Points mapping outside the grid are clipped silently: the iteration
    /// loop is expected to wander off-window now and then, and those
    /// samples are simply not drawn. NaN or infinite coordinates take the
    /// same path.
    pub fn put_pixel(&mut self, point: &Vector2D) {
        if let Some((row, col)) = self.indices_of(point) {
            self.cells[row * self.width as usize + col] = 1;
        }
    }

    /// Reset every cell to unvisited.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Row-major cell storage, `height` rows of `width` columns.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate rows top-down.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width as usize)
    }

    /// Render the grid as ASCII art, `X` for visited cells, one line per
    /// row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            for &cell in row {
                out.push(if cell == 1 { 'X' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }

    /// Map a point to grid indices, or `None` when it lands outside the
    /// grid. Truncation is toward zero and the range check runs on the
    /// truncated value, so a point truncating to -0 still lands in index 0
    /// while NaN and infinities fail the comparison and clip.
    fn indices_of(&self, point: &Vector2D) -> Option<(usize, usize)> {
        let indices = self.coords_to_indices.transform(point);
        let row = indices.x0().trunc();
        let col = indices.x1().trunc();
        if !(row >= 0.0 && row < f64::from(self.height)) {
            return None;
        }
        if !(col >= 0.0 && col < f64::from(self.width)) {
            return None;
        }
        Some((row as usize, col as usize))
    }
}

/// Derive the affine map taking description-space points to (row, col)
/// indices. The row comes from y (inverted, screen style) and the column
/// from x:
///
/// ```text
/// row = (height-1) * (max_y - y) / (max_y - min_y)
/// col = (width-1)  * (x - min_x) / (max_x - min_x)
/// ```
///
/// folded into a single matrix-plus-translation with the anti-diagonal
/// matrix `[[0, a01], [a10, 0]]` carrying the axis swap.
fn derive_indices_transform(
    width: u32,
    height: u32,
    min_coords: &Vector2D,
    max_coords: &Vector2D,
) -> AffineTransform2D {
    let w = f64::from(width);
    let h = f64::from(height);
    let a01 = (h - 1.0) / (min_coords.x1() - max_coords.x1());
    let a10 = (w - 1.0) / (max_coords.x0() - min_coords.x0());
    let x0 = (h - 1.0) * max_coords.x1() / (max_coords.x1() - min_coords.x1());
    let x1 = (w - 1.0) * min_coords.x0() / (min_coords.x0() - max_coords.x0());
    AffineTransform2D::new(
        Matrix2x2::new(0.0, a01, a10, 0.0),
        Vector2D::new(x0, x1),
    )
}
