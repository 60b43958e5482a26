//! Fit-to-canvas transform

use glam::{DVec2, dvec2};

use super::defaults::{CanvasSpec, MIN_WORLD_EXTENT};
use crate::types::BoundingBox;

/// Uniform world → canvas mapping.
///
/// Applied right to left: shift `origin` (the box minimum corner) to zero,
/// scale by `scale`, then translate by `translate` to center the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub translate: DVec2,
    pub scale: f64,
    pub origin: DVec2,
    /// World extent after clamping, as used for centering and the grid
    pub world_size: DVec2,
}

impl ViewportTransform {
    /// Map a world point to canvas pixels
    pub fn apply(&self, p: DVec2) -> DVec2 {
        (p - self.origin) * self.scale + self.translate
    }
}

/// Compute the transform that fits `bounds` into `canvas`
pub fn fit(bounds: &BoundingBox, canvas: &CanvasSpec) -> ViewportTransform {
    let raw_width = bounds.width();
    let raw_height = bounds.height();
    let world_width = raw_width.max(MIN_WORLD_EXTENT);
    let world_height = raw_height.max(MIN_WORLD_EXTENT);
    if world_width != raw_width || world_height != raw_height {
        crate::log::warn!(raw_width, raw_height, "degenerate bounds clamped");
    }

    let mut scale = (canvas.width * canvas.fill_fraction / world_width)
        .min(canvas.height * canvas.fill_fraction / world_height);
    if scale.is_nan() || scale <= 0.0 {
        crate::log::warn!(scale, "non-positive scale, falling back to 1");
        scale = 1.0;
    }

    let translate = dvec2(
        (canvas.width - world_width * scale) / 2.0,
        (canvas.height - world_height * scale) / 2.0,
    );

    crate::log::debug!(
        tx = translate.x,
        ty = translate.y,
        scale,
        "viewport fitted"
    );

    ViewportTransform {
        translate,
        scale,
        origin: bounds.min,
        world_size: dvec2(world_width, world_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::path_builder::build_arc_path;
    use crate::render::sequence::fibonacci_radii;

    fn bbox(min: (f64, f64), max: (f64, f64)) -> BoundingBox {
        BoundingBox {
            min: dvec2(min.0, min.1),
            max: dvec2(max.0, max.1),
        }
    }

    #[test]
    fn square_box_fills_ninety_five_percent() {
        let t = fit(&bbox((-1.0, 0.0), (1.0, 2.0)), &CanvasSpec::DEFAULT);
        assert!((t.scale - 213.75).abs() < 1e-9);
        assert!((t.translate.x - 11.25).abs() < 1e-9);
        assert!((t.translate.y - 11.25).abs() < 1e-9);
    }

    #[test]
    fn box_corners_land_centered_on_canvas() {
        let b = bbox((-4.0, -3.0), (6.0, 7.0));
        let t = fit(&b, &CanvasSpec::DEFAULT);
        let lo = t.apply(b.min);
        let hi = t.apply(b.max);
        assert!((lo.x - 11.25).abs() < 1e-9 && (lo.y - 11.25).abs() < 1e-9);
        assert!((hi.x - 438.75).abs() < 1e-9 && (hi.y - 438.75).abs() < 1e-9);
    }

    #[test]
    fn wide_box_is_limited_by_width() {
        let b = bbox((0.0, 0.0), (10.0, 2.0));
        let t = fit(&b, &CanvasSpec::DEFAULT);
        assert!((t.scale - 42.75).abs() < 1e-9);
        // Vertically centered
        let mid = t.apply(dvec2(5.0, 1.0));
        assert!((mid.x - 225.0).abs() < 1e-9 && (mid.y - 225.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_box_is_clamped() {
        let t = fit(&BoundingBox::at_origin(), &CanvasSpec::DEFAULT);
        assert!(t.scale > 0.0 && t.scale.is_finite());
        assert_eq!(t.world_size, dvec2(MIN_WORLD_EXTENT, MIN_WORLD_EXTENT));
    }

    #[test]
    fn scale_positive_for_every_valid_spiral() {
        for n in 1..=50 {
            let path = build_arc_path(&fibonacci_radii(n).unwrap());
            let t = fit(&path.bounds, &CanvasSpec::DEFAULT);
            assert!(t.scale > 0.0, "n={n}");
            assert!(t.world_size.x > 0.0 && t.world_size.y > 0.0, "n={n}");
        }
    }
}
