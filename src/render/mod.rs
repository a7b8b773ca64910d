mod draw_log;
mod raster_canvas;

pub use draw_log::{DrawCall, DrawLog};
pub use raster_canvas::RasterCanvas;

use crate::math::Point2;
use crate::style::Color;

/// A drawing target that accepts filled polygons.
pub trait Surface {
    /// Paints the whole surface with `color`, discarding previous content.
    fn clear(&mut self, color: Color);

    /// Fills and/or outlines a closed polygon. Points are in canvas space.
    fn fill_polygon(&mut self, points: &[Point2], fill: Option<Color>, outline: Option<Color>);
}
