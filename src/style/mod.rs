mod depth_palette;

pub use depth_palette::DepthPalette;

/// An RGBA color with 8 bits per channel.
pub type Color = image::Rgba<u8>;

/// Opaque black.
pub const BLACK: Color = image::Rgba([0, 0, 0, 255]);

/// The kind of shape a style is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// The square built on an edge.
    Square,
    /// The triangle cap built on a square's outer edge.
    Triangle,
}

/// Drawing parameters for one shape.
///
/// `angle` and `mirror` are only read for triangles; when omitted the
/// traversal-wide apex rule applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Interior color, or `None` to leave the interior unpainted.
    pub fill: Option<Color>,
    /// Outline color, or `None` for no outline.
    pub outline: Option<Color>,
    /// Complementary base angle override, in degrees.
    pub angle: Option<f64>,
    /// Mirror override.
    pub mirror: Option<bool>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            outline: Some(BLACK),
            angle: None,
            mirror: None,
        }
    }
}

impl Style {
    /// Creates a style with the given fill and a black outline.
    #[must_use]
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            ..Self::default()
        }
    }

    /// Replaces the outline color.
    #[must_use]
    pub fn with_outline(mut self, outline: Option<Color>) -> Self {
        self.outline = outline;
        self
    }

    /// Sets the base angle override.
    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Sets the mirror override.
    #[must_use]
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = Some(mirror);
        self
    }
}

/// Chooses how each shape of the tree is drawn.
pub trait StylePolicy {
    /// Returns the style for a shape at `depth` (0 for the trunk square).
    fn style(&self, depth: u32, shape: ShapeKind) -> Style;
}

impl<F> StylePolicy for F
where
    F: Fn(u32, ShapeKind) -> Style,
{
    fn style(&self, depth: u32, shape: ShapeKind) -> Style {
        self(depth, shape)
    }
}
