//! Spiral rendering engine
//!
//! This module is organized into submodules:
//! - `defaults`: Canvas configuration and term limits
//! - `sequence`: Fibonacci radius sequence
//! - `path_builder`: Folds radii into connected quarter-circle arcs and bounds
//! - `viewport`: Fit-to-canvas transform
//! - `format`: Numeric formatting contract for emitted documents
//! - `svg`: SVG generation

pub mod defaults;
pub mod format;
pub mod path_builder;
pub mod sequence;
pub mod svg;
pub mod viewport;

pub use defaults::CanvasSpec;
pub use path_builder::ArcPath;
pub use viewport::ViewportTransform;

use crate::errors::RenderError;
use crate::types::{BoundingBox, Heading, TermCount};

/// A fully computed spiral, ready to serialize.
///
/// Built fresh for every request and owned by the caller; nothing is cached
/// or shared between renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Spiral {
    pub count: TermCount,
    pub radii: Vec<f64>,
    pub path: ArcPath,
    pub transform: ViewportTransform,
}

impl Spiral {
    /// Run the geometry pipeline for `n` terms on `canvas`
    pub fn new(n: i64, canvas: &CanvasSpec) -> Result<Spiral, RenderError> {
        canvas.validate()?;
        let count = TermCount::try_new(n)?;

        let radii = sequence::radii_for(count);
        crate::log::debug!(count = %count, largest = radii[radii.len() - 1], "fibonacci radii");

        let path = path_builder::build_arc_path(&radii);
        let transform = viewport::fit(&path.bounds, canvas);

        Ok(Spiral {
            count,
            radii,
            path,
            transform,
        })
    }

    pub fn bounds(&self) -> BoundingBox {
        self.path.bounds
    }

    pub fn final_heading(&self) -> Heading {
        self.path.final_heading
    }

    /// Serialize to an SVG document
    pub fn to_svg(&self, canvas: &CanvasSpec) -> Result<String, RenderError> {
        svg::generate_svg(&self.path, &self.transform, canvas)
    }
}

/// Render `n` spiral terms on a custom canvas
pub fn render_with(n: i64, canvas: &CanvasSpec) -> Result<String, RenderError> {
    Spiral::new(n, canvas)?.to_svg(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_exposes_every_stage() {
        let spiral = Spiral::new(4, &CanvasSpec::DEFAULT).unwrap();
        assert_eq!(spiral.count.get(), 4);
        assert_eq!(spiral.radii, vec![1.0, 1.0, 2.0, 3.0]);
        assert_eq!(spiral.path.segments.len(), 4);
        assert_eq!(spiral.final_heading().degrees(), 0.0);
        assert_eq!(spiral.transform.origin, spiral.bounds().min);
    }

    #[test]
    fn invalid_canvas_is_rejected_before_geometry() {
        let canvas = CanvasSpec {
            height: f64::INFINITY,
            ..CanvasSpec::DEFAULT
        };
        assert!(matches!(
            Spiral::new(5, &canvas),
            Err(RenderError::InvalidCanvas { .. })
        ));
    }

    #[test]
    fn custom_canvas_changes_fit() {
        let wide = CanvasSpec {
            width: 900.0,
            ..CanvasSpec::DEFAULT
        };
        let a = Spiral::new(6, &CanvasSpec::DEFAULT).unwrap();
        let b = Spiral::new(6, &wide).unwrap();
        assert_eq!(a.path, b.path);
        assert!(b.transform.translate.x > a.transform.translate.x);
    }
}
