//! Renders Pythagoras tree fractals.
//!
//! A seed edge carries a square, the square's outer edge carries a triangle
//! cap, and the two legs of the cap become the seed edges of the next level.
//! Shapes are styled per depth by a [`StylePolicy`] and drawn onto a
//! [`Surface`], normally a [`RasterCanvas`] that can be saved as an image.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod style;
pub mod tree;

pub use error::{Result, TreeError};
pub use render::{RasterCanvas, Surface};
pub use style::{Style, StylePolicy};
pub use tree::{GenerateParams, TreeConfig, TreeFractal};
