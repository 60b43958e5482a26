//! Strongly-typed geometry primitives for the spiral engine.
//!
//! World coordinates are plain `glam::DVec2` values. Quantities with their own
//! rules (validated term counts, wrapped headings, accumulated bounds) get
//! newtypes so those rules live in one place.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::RenderError;
use crate::render::defaults::{MAX_TERMS, MIN_TERMS};

/// Number of spiral terms, validated to lie in `MIN_TERMS..=MAX_TERMS`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TermCount(u32);

impl TermCount {
    /// Create a TermCount with validation (rejects values outside 1..=50)
    pub fn try_new(n: i64) -> Result<TermCount, RenderError> {
        if (MIN_TERMS..=MAX_TERMS).contains(&n) {
            Ok(TermCount(n as u32))
        } else {
            Err(RenderError::out_of_range(n))
        }
    }

    /// Get the count as a usize for indexing and allocation
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of travel in degrees, wrapped into `[0, 360)`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Heading(f64);

impl Heading {
    pub const ZERO: Heading = Heading(0.0);

    /// Quarter turn applied after every arc
    pub const QUARTER_TURN: f64 = 90.0;

    /// Create a heading from degrees, wrapping into `[0, 360)`
    pub fn from_degrees(degrees: f64) -> Heading {
        Heading(degrees.rem_euclid(360.0))
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Heading after one counter-clockwise quarter turn
    pub fn advance(self) -> Heading {
        Heading((self.0 + Self::QUARTER_TURN) % 360.0)
    }

    /// Unit vector perpendicular (to the left) of the direction of travel
    pub fn perpendicular(self) -> DVec2 {
        let rad = self.0.to_radians();
        dvec2(-rad.sin(), rad.cos())
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Axis-aligned bounding box in world coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl BoundingBox {
    /// The degenerate box holding only the origin, where every spiral starts
    pub fn at_origin() -> Self {
        BoundingBox {
            min: DVec2::ZERO,
            max: DVec2::ZERO,
        }
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include the full circle of `radius` around `center`
    pub fn expand_circle(&mut self, center: DVec2, radius: f64) {
        self.expand_point(center - DVec2::splat(radius));
        self.expand_point(center + DVec2::splat(radius));
    }

    /// Whether the box encloses `p`, allowing `tolerance` of slack
    pub fn contains(&self, p: DVec2, tolerance: f64) -> bool {
        p.x >= self.min.x - tolerance
            && p.x <= self.max.x + tolerance
            && p.y >= self.min.y - tolerance
            && p.y <= self.max.y + tolerance
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::at_origin()
    }
}

/// One quarter-circle piece of the spiral, in traversal order.
///
/// The arc starts where the previous segment ended (the origin for the first
/// one) and always sweeps counter-clockwise through exactly 90 degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub radius: f64,
    pub center: DVec2,
    /// Angle of the start point around `center`, in degrees
    pub start_angle: f64,
    /// Always `start_angle + 90`
    pub end_angle: f64,
    pub end: DVec2,
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_count_bounds() {
        assert!(TermCount::try_new(1).is_ok());
        assert!(TermCount::try_new(50).is_ok());
        assert_eq!(TermCount::try_new(0), Err(RenderError::out_of_range(0)));
        assert_eq!(TermCount::try_new(51), Err(RenderError::out_of_range(51)));
        assert_eq!(TermCount::try_new(i64::MIN), Err(RenderError::out_of_range(i64::MIN)));
    }

    #[test]
    fn heading_wraps_after_four_turns() {
        let mut heading = Heading::ZERO;
        for _ in 0..4 {
            heading = heading.advance();
        }
        assert_eq!(heading.degrees(), 0.0);
        assert_eq!(Heading::from_degrees(-90.0).degrees(), 270.0);
    }

    #[test]
    fn perpendicular_of_zero_heading_points_up() {
        let p = Heading::ZERO.perpendicular();
        assert_eq!(p, dvec2(0.0, 1.0));
    }

    #[test]
    fn circle_expansion_covers_full_extent() {
        let mut bbox = BoundingBox::at_origin();
        bbox.expand_circle(dvec2(0.0, 1.0), 1.0);
        assert_eq!(bbox.min, dvec2(-1.0, 0.0));
        assert_eq!(bbox.max, dvec2(1.0, 2.0));
        assert!(bbox.contains(DVec2::ZERO, 0.0));
        assert!(!bbox.contains(dvec2(0.0, 2.5), 1e-9));
    }
}
