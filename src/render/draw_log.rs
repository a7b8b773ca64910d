use crate::math::Point2;
use crate::style::Color;

use super::Surface;

/// One recorded polygon draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub points: Vec<Point2>,
    pub fill: Option<Color>,
    pub outline: Option<Color>,
}

/// A surface that records draw calls instead of rasterising them.
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    background: Option<Color>,
    calls: Vec<DrawCall>,
}

impl DrawLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color of the last clear, if any.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Returns the draw calls since the last clear, in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns the number of recorded draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns `true` if nothing has been drawn since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl Surface for DrawLog {
    fn clear(&mut self, color: Color) {
        self.background = Some(color);
        self.calls.clear();
    }

    fn fill_polygon(&mut self, points: &[Point2], fill: Option<Color>, outline: Option<Color>) {
        self.calls.push(DrawCall {
            points: points.to_vec(),
            fill,
            outline,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BLACK;

    #[test]
    fn records_calls_and_clear_resets() {
        let mut log = DrawLog::new();
        assert!(log.background().is_none());
        log.fill_polygon(
            &[Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(1.0, 3.0)],
            None,
            Some(BLACK),
        );
        assert_eq!(log.len(), 1);
        assert_eq!(log.calls()[0].outline, Some(BLACK));

        log.clear(BLACK);
        assert!(log.is_empty());
        assert_eq!(log.background(), Some(BLACK));
    }
}
