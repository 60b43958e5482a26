//! Default canvas settings (stroke widths are device pixels)

use crate::errors::RenderError;

pub const MIN_TERMS: i64 = 1;
pub const MAX_TERMS: i64 = 50;

pub const CANVAS_WIDTH: f64 = 450.0;
pub const CANVAS_HEIGHT: f64 = 450.0;
pub const FILL_FRACTION: f64 = 0.95;
pub const GRID_STEPS: u32 = 10;
/// Smallest world extent used for fitting; guards zero-width geometry
pub const MIN_WORLD_EXTENT: f64 = 1e-6;

pub const GRID_STROKE: f64 = 0.6;
pub const AXIS_STROKE: f64 = 1.5;
pub const SPIRAL_STROKE: f64 = 2.8;

pub const GRID_COLOR: &str = "#e8e8e8";
pub const AXIS_COLOR: &str = "#000";
pub const SPIRAL_COLOR: &str = "#1f77b4";

/// Fixed rendering configuration.
///
/// Shared read-only between renders; nothing in the engine mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    /// Fraction of the canvas the spiral's bounding box may occupy
    pub fill_fraction: f64,
    pub grid_steps: u32,
    pub grid_stroke: f64,
    pub axis_stroke: f64,
    pub spiral_stroke: f64,
}

impl CanvasSpec {
    pub const DEFAULT: CanvasSpec = CanvasSpec {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        fill_fraction: FILL_FRACTION,
        grid_steps: GRID_STEPS,
        grid_stroke: GRID_STROKE,
        axis_stroke: AXIS_STROKE,
        spiral_stroke: SPIRAL_STROKE,
    };

    /// Reject settings that would produce an empty or non-finite document
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(RenderError::InvalidCanvas {
                reason: "width must be finite and positive",
            });
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(RenderError::InvalidCanvas {
                reason: "height must be finite and positive",
            });
        }
        if !(self.fill_fraction > 0.0 && self.fill_fraction <= 1.0) {
            return Err(RenderError::InvalidCanvas {
                reason: "fill fraction must be in (0, 1]",
            });
        }
        if self.grid_steps == 0 {
            return Err(RenderError::InvalidCanvas {
                reason: "grid needs at least one step",
            });
        }
        let strokes = [self.grid_stroke, self.axis_stroke, self.spiral_stroke];
        if strokes.iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
            return Err(RenderError::InvalidCanvas {
                reason: "stroke widths must be finite and non-negative",
            });
        }
        Ok(())
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
