use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{ExportError, Result};
use crate::math::polygon_2d::is_degenerate;
use crate::math::Point2;
use crate::style::Color;

use super::Surface;

/// An in-memory RGBA raster.
///
/// Polygons are filled with the even-odd rule, sampling each pixel at its
/// centre, and outlined with one-pixel lines between rounded vertices. Drawn
/// pixels replace what is underneath; nothing is blended. Polygons that enclose
/// no area are skipped entirely.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    /// Creates a canvas filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    /// Returns the canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns the canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the underlying image.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the canvas, returning the underlying image.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Writes the canvas to `path`, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::UnsupportedFormat` if the extension names no known
    /// format, `ExportError::Io` if the file cannot be written, and
    /// `ExportError::Encode` if the format cannot encode RGBA data or is not
    /// compiled in.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)
            .map_err(|_| ExportError::UnsupportedFormat(path.to_path_buf()))?;
        self.image
            .save_with_format(path, format)
            .map_err(|err| match err {
                ImageError::IoError(io) => ExportError::Io(io),
                other => ExportError::Encode(other),
            })?;
        info!(path = %path.display(), ?format, "saved canvas");
        Ok(())
    }

    /// Writes a pixel if it lies on the canvas.
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if x < self.image.width() && y < self.image.height() {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_interior(&mut self, points: &[Point2], color: Color) {
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        let height = f64::from(self.image.height());
        let width = f64::from(self.image.width());
        let first_row = (min_y - 0.5).ceil().max(0.0);
        let last_row = (max_y - 0.5).floor().min(height - 1.0);
        if first_row > last_row {
            return;
        }

        let mut crossings = Vec::with_capacity(points.len());
        let mut row = first_row;
        while row <= last_row {
            let sample_y = row + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = &points[(i + 1) % points.len()];
                if (a.y <= sample_y && sample_y < b.y) || (b.y <= sample_y && sample_y < a.y) {
                    crossings.push(a.x + (sample_y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil().max(0.0);
                let end = (span[1] - 0.5).ceil().min(width);
                let mut col = start;
                while col < end {
                    self.plot(col as i64, row as i64, color);
                    col += 1.0;
                }
            }
            row += 1.0;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stroke_outline(&mut self, points: &[Point2], color: Color) {
        for (i, a) in points.iter().enumerate() {
            let b = &points[(i + 1) % points.len()];
            self.draw_line(
                (a.x.round() as i64, a.y.round() as i64),
                (b.x.round() as i64, b.y.round() as i64),
                color,
            );
        }
    }

    /// Bresenham line, both endpoints inclusive.
    fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), color: Color) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl Surface for RasterCanvas {
    fn clear(&mut self, color: Color) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn fill_polygon(&mut self, points: &[Point2], fill: Option<Color>, outline: Option<Color>) {
        if is_degenerate(points) || points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return;
        }
        if let Some(color) = fill {
            self.fill_interior(points, color);
        }
        if let Some(color) = outline {
            self.stroke_outline(points, color);
        }
    }
}
