//! The chaos-game iteration engine.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::ChaosCanvas;
use crate::description::ChaosGameDescription;
use crate::error::ChaosGameError;
use crate::vector::Vector2D;

/// Runs the random iteration algorithm for one description.
///
/// Owns the canvas, the running point and a private random source. Each
/// step applies a uniformly random transform from the description to the
/// running point and plots the result; because every transform is
/// contractive, the visited cells approximate the IFS attractor no matter
/// where the walk starts. The point persists across [`run_steps`] calls,
/// so repeated calls continue the same walk instead of restarting it.
///
/// [`run_steps`]: ChaosGame::run_steps
#[derive(Debug)]
pub struct ChaosGame {
    description: ChaosGameDescription,
    canvas: ChaosCanvas,
    current_point: Vector2D,
    rng: StdRng,
}

impl ChaosGame {
    /// Create a game with an entropy-seeded random source. The canvas is
    /// built over the description's bounding box and the walk starts at
    /// the origin.
    pub fn new(
        description: ChaosGameDescription,
        width: u32,
        height: u32,
    ) -> Result<Self, ChaosGameError> {
        Self::with_rng(description, width, height, StdRng::from_entropy())
    }

    /// Create a game with a fixed seed, for reproducible renders and
    /// deterministic tests.
    pub fn with_seed(
        description: ChaosGameDescription,
        width: u32,
        height: u32,
        seed: u64,
    ) -> Result<Self, ChaosGameError> {
        Self::with_rng(description, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        description: ChaosGameDescription,
        width: u32,
        height: u32,
        rng: StdRng,
    ) -> Result<Self, ChaosGameError> {
        let canvas = ChaosCanvas::new(
            width,
            height,
            *description.min_coords(),
            *description.max_coords(),
        )?;
        Ok(Self {
            description,
            canvas,
            current_point: Vector2D::new(0.0, 0.0),
            rng,
        })
    }

    pub fn canvas(&self) -> &ChaosCanvas {
        &self.canvas
    }

    pub fn description(&self) -> &ChaosGameDescription {
        &self.description
    }

    /// The point the walk currently sits on.
    pub fn current_point(&self) -> &Vector2D {
        &self.current_point
    }

    /// Replace the random source with a freshly seeded one. Canvas and
    /// current point are left untouched.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Run `steps` iterations.
    ///
    /// Each iteration draws a uniformly random index into the transform
    /// list, applies that transform to the current point and plots the
    /// new point on the canvas. Runs to completion; callers wanting
    /// progressive rendering invoke this repeatedly with smaller
    /// increments and read the canvas in between.
    pub fn run_steps(&mut self, steps: usize) {
        debug!("running {steps} chaos game steps");
        let transforms = self.description.transforms();
        for _ in 0..steps {
            let index = self.rng.gen_range(0..transforms.len());
            self.current_point = transforms[index].transform(&self.current_point);
            self.canvas.put_pixel(&self.current_point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;
    use crate::transforms::{JuliaTransform, Transform2D};

    fn julia_description() -> ChaosGameDescription {
        let constant = Complex::new(0.0, 0.0);
        ChaosGameDescription::new(
            Vector2D::new(-1.6, -1.0),
            Vector2D::new(1.6, 1.0),
            vec![
                Transform2D::Julia(JuliaTransform::new(constant, 1).unwrap()),
                Transform2D::Julia(JuliaTransform::new(constant, -1).unwrap()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn construction_builds_canvas_from_description_bounds() {
        let game = ChaosGame::new(julia_description(), 800, 600).unwrap();
        assert_eq!(game.canvas().width(), 800);
        assert_eq!(game.canvas().height(), 600);
        assert_eq!(*game.canvas().min_coords(), Vector2D::new(-1.6, -1.0));
        assert_eq!(*game.canvas().max_coords(), Vector2D::new(1.6, 1.0));
    }

    #[test]
    fn walk_starts_at_the_origin() {
        let game = ChaosGame::new(julia_description(), 100, 100).unwrap();
        assert_eq!(*game.current_point(), Vector2D::new(0.0, 0.0));
    }

    #[test]
    fn construction_fails_on_degenerate_bounds() {
        let description = ChaosGameDescription::new(
            Vector2D::new(0.0, -1.0),
            Vector2D::new(0.0, 1.0),
            julia_description().transforms().to_vec(),
        )
        .unwrap();
        let result = ChaosGame::new(description, 100, 100);
        assert_eq!(result.unwrap_err(), ChaosGameError::DegenerateBounds("x"));
    }

    #[test]
    fn zero_steps_leaves_canvas_blank() {
        let mut game = ChaosGame::with_seed(julia_description(), 100, 100, 7).unwrap();
        game.run_steps(0);
        assert!(game.canvas().cells().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn run_steps_moves_the_current_point() {
        let mut game = ChaosGame::with_seed(julia_description(), 100, 100, 7).unwrap();
        game.run_steps(50);
        assert_ne!(*game.current_point(), Vector2D::new(0.0, 0.0));
    }

    #[test]
    fn same_seed_gives_identical_canvases() {
        let mut a = ChaosGame::with_seed(julia_description(), 200, 200, 42).unwrap();
        let mut b = ChaosGame::with_seed(julia_description(), 200, 200, 42).unwrap();
        a.run_steps(2_000);
        b.run_steps(2_000);
        assert_eq!(a.canvas().cells(), b.canvas().cells());
    }

    #[test]
    fn split_runs_continue_the_same_walk() {
        let mut chunked = ChaosGame::with_seed(julia_description(), 200, 200, 9).unwrap();
        let mut single = ChaosGame::with_seed(julia_description(), 200, 200, 9).unwrap();
        chunked.run_steps(500);
        chunked.run_steps(500);
        single.run_steps(1_000);
        assert_eq!(chunked.canvas().cells(), single.canvas().cells());
        assert_eq!(chunked.current_point(), single.current_point());
    }

    #[test]
    fn reseed_restarts_the_random_sequence() {
        let mut a = ChaosGame::with_seed(julia_description(), 200, 200, 1).unwrap();
        let mut b = ChaosGame::with_seed(julia_description(), 200, 200, 1).unwrap();
        a.run_steps(100);
        b.run_steps(100);
        a.reseed(1);
        b.reseed(1);
        a.run_steps(100);
        b.run_steps(100);
        assert_eq!(a.canvas().cells(), b.canvas().cells());
    }
}
