use std::path::Path;

use tracing::{info, warn};

use crate::error::{ParameterError, Result};
use crate::geometry::Edge;
use crate::math::Point2;
use crate::operations::construction::ApexRule;
use crate::operations::traversal::{GrowTree, GrowthStats};
use crate::render::{RasterCanvas, Surface};
use crate::style::{Color, DepthPalette, StylePolicy};

/// Canvas size, seed edge placement and default background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Length of the seed edge in pixels.
    pub base_length: f64,
    /// Background used when a run does not override it.
    pub background: Color,
    /// Horizontal shift of the seed edge from the centre.
    pub offset_x: f64,
    /// Distance of the seed edge above the bottom of the canvas.
    pub offset_y: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            base_length: 200.0,
            background: image::Rgba([255, 255, 255, 0]),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl TreeConfig {
    /// Checks that the canvas has area and the seed edge is usable.
    ///
    /// A seed edge at least as long as the canvas is wide is accepted with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` for a zero dimension or a
    /// non-positive base length, and `ParameterError::NotFinite` for NaN or
    /// infinite lengths and offsets.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(ParameterError::OutOfRange {
                    parameter,
                    value: 0.0,
                    min: 1.0,
                    max: f64::from(u32::MAX),
                }
                .into());
            }
        }
        for (parameter, value) in [
            ("base_length", self.base_length),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { parameter }.into());
            }
        }
        if self.base_length <= 0.0 {
            return Err(ParameterError::OutOfRange {
                parameter: "base_length",
                value: self.base_length,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if self.base_length >= f64::from(self.width) {
            warn!(
                base_length = self.base_length,
                width = self.width,
                "seed edge is as wide as the canvas"
            );
        }
        Ok(())
    }

    /// Returns the seed edge: centred horizontally, `offset_y` above the
    /// bottom of the canvas, shifted right by `offset_x`.
    #[must_use]
    pub fn seed_edge(&self) -> Edge {
        let centre = f64::from(self.width) / 2.0 + self.offset_x;
        let y = f64::from(self.height) - self.offset_y;
        let half = self.base_length / 2.0;
        Edge::new(Point2::new(centre - half, y), Point2::new(centre + half, y))
    }
}

/// Parameters of a single [`TreeFractal::generate`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateParams {
    /// Number of levels to expand.
    pub depth: u32,
    /// Background override for this run.
    pub background: Option<Color>,
    /// Apex rule used for triangles whose style carries no override.
    pub apex: ApexRule,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            depth: 12,
            background: None,
            apex: ApexRule::default(),
        }
    }
}

impl GenerateParams {
    /// Sets the depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the background override.
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Sets the apex rule.
    #[must_use]
    pub fn with_apex(mut self, apex: ApexRule) -> Self {
        self.apex = apex;
        self
    }

    /// Uses complementary base angles `angle` and `90° - angle`.
    #[must_use]
    pub fn with_angle(self, angle: f64, mirror: bool) -> Self {
        self.with_apex(ApexRule::Complementary { angle, mirror })
    }
}

/// A Pythagoras tree drawn onto an owned surface.
///
/// Every call to [`TreeFractal::generate`] clears the surface and redraws the
/// whole tree.
#[derive(Debug)]
pub struct TreeFractal<S: Surface = RasterCanvas> {
    config: TreeConfig,
    surface: S,
}

impl TreeFractal<RasterCanvas> {
    /// Creates a tree with a raster canvas sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        let canvas = RasterCanvas::new(config.width, config.height, config.background);
        Ok(Self {
            config,
            surface: canvas,
        })
    }

    /// Returns the raster canvas.
    #[must_use]
    pub fn canvas(&self) -> &RasterCanvas {
        &self.surface
    }

    /// Writes the canvas to `path`, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an export error if the file cannot be written or encoded.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.surface.save(path)
    }
}

impl<S: Surface> TreeFractal<S> {
    /// Creates a tree that draws onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_surface(config: TreeConfig, surface: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, surface })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the tree, returning the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draws the tree with the default [`DepthPalette`].
    ///
    /// # Errors
    ///
    /// See [`TreeFractal::generate_with`].
    pub fn generate(&mut self, params: &GenerateParams) -> Result<GrowthStats> {
        self.generate_with(params, &DepthPalette::default())
    }

    /// Clears the surface and draws the tree, styling shapes with `policy`.
    ///
    /// # Errors
    ///
    /// Returns a parameter error if the depth is above the limit or an apex
    /// rule does not form a triangle. Such errors are detected before the
    /// surface is touched.
    pub fn generate_with<P: StylePolicy + ?Sized>(
        &mut self,
        params: &GenerateParams,
        policy: &P,
    ) -> Result<GrowthStats> {
        let grow = GrowTree::new(self.config.seed_edge(), params.depth, params.apex, policy);
        grow.validate()?;

        self.surface
            .clear(params.background.unwrap_or(self.config.background));
        let stats = grow.execute(&mut self.surface)?;
        info!(
            depth = stats.levels,
            polygons = stats.polygons,
            "generated tree"
        );
        Ok(stats)
    }
}
