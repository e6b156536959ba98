//! chaoscope-core: an iterated-function-system "chaos game" engine.
//!
//! A [`ChaosGameDescription`] pairs a bounded window of the plane with an
//! ordered list of contractive transforms. A [`ChaosGame`] repeatedly
//! applies a uniformly random transform from that list to a running point
//! and accumulates the visited cells on a [`ChaosCanvas`]; the long-run
//! picture approximates the IFS attractor regardless of the starting
//! point. Descriptions come from the [`presets`] catalogue or from the
//! [`format`] text codec.

pub mod canvas;
pub mod complex;
pub mod description;
pub mod error;
pub mod format;
pub mod game;
pub mod matrix;
pub mod presets;
pub mod transforms;
pub mod vector;

pub use canvas::ChaosCanvas;
pub use complex::Complex;
pub use description::ChaosGameDescription;
pub use error::ChaosGameError;
pub use format::FormatError;
pub use game::ChaosGame;
pub use matrix::Matrix2x2;
pub use transforms::{AffineTransform2D, JuliaTransform, Transform2D};
pub use vector::Vector2D;
