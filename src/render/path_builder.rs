//! Arc chain builder.
//!
//! Folds the radius sequence into connected quarter-circle arcs. Each step is
//! a pure function of the previous [`TraversalState`] and one radius, so the
//! chain is built with an explicit accumulator and no shared mutable fields.
//!
//! # Bounding box
//!
//! Every step folds in the *full* circle around the arc's center, not just the
//! drawn quarter. The box is therefore larger than the tight extent of the
//! curve, and the fitted scale depends on that. Do not tighten it.

use glam::{DVec2, dvec2};

use crate::types::{ArcSegment, BoundingBox, Heading};

/// State threaded through the fold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalState {
    /// Where the next arc starts
    pub position: DVec2,
    pub heading: Heading,
    pub bounds: BoundingBox,
}

impl TraversalState {
    /// Start of every spiral: at the origin, heading 0°
    pub fn initial() -> Self {
        TraversalState {
            position: DVec2::ZERO,
            heading: Heading::ZERO,
            bounds: BoundingBox::at_origin(),
        }
    }
}

impl Default for TraversalState {
    fn default() -> Self {
        Self::initial()
    }
}

/// The finished spiral geometry
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    pub segments: Vec<ArcSegment>,
    pub bounds: BoundingBox,
    pub final_heading: Heading,
}

impl ArcPath {
    /// Where the spiral ends (the origin when there are no segments)
    pub fn end(&self) -> DVec2 {
        self.segments.last().map_or(DVec2::ZERO, |s| s.end)
    }
}

/// Advance one arc of radius `radius` from `state`
pub fn step(state: TraversalState, radius: f64) -> (TraversalState, ArcSegment) {
    let center = state.position + state.heading.perpendicular() * radius;

    let to_start = state.position - center;
    let start_angle = to_start.y.atan2(to_start.x).to_degrees();
    let end_angle = start_angle + Heading::QUARTER_TURN;

    let end_rad = end_angle.to_radians();
    let end = center + dvec2(end_rad.cos(), end_rad.sin()) * radius;

    let segment = ArcSegment {
        radius,
        center,
        start_angle,
        end_angle,
        end,
        x_axis_rotation: 0.0,
        large_arc: false,
        sweep: true,
    };

    let mut bounds = state.bounds;
    bounds.expand_circle(center, radius);
    bounds.expand_point(end);

    let next = TraversalState {
        position: end,
        heading: state.heading.advance(),
        bounds,
    };
    (next, segment)
}

/// Build the connected arc chain for `radii`, in order
pub fn build_arc_path(radii: &[f64]) -> ArcPath {
    let (state, segments) = radii.iter().fold(
        (TraversalState::initial(), Vec::with_capacity(radii.len())),
        |(state, mut segments), &radius| {
            let (next, segment) = step(state, radius);
            segments.push(segment);
            (next, segments)
        },
    );

    crate::log::debug!(
        segments = segments.len(),
        min_x = state.bounds.min.x,
        min_y = state.bounds.min.y,
        max_x = state.bounds.max.x,
        max_y = state.bounds.max.y,
        "arc path built"
    );

    ArcPath {
        segments,
        bounds: state.bounds,
        final_heading: state.heading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sequence::fibonacci_radii;

    const EPS: f64 = 1e-6;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn approx_pt(a: DVec2, b: DVec2) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y)
    }

    #[test]
    fn single_arc() {
        let path = build_arc_path(&[1.0]);
        assert_eq!(path.segments.len(), 1);

        let seg = path.segments[0];
        assert_eq!(seg.radius, 1.0);
        assert!(approx_pt(seg.center, dvec2(0.0, 1.0)), "center {:?}", seg.center);
        assert!(approx(seg.start_angle, -90.0), "start {}", seg.start_angle);
        assert!(approx(seg.end_angle, 0.0), "end {}", seg.end_angle);
        assert!(approx_pt(seg.end, dvec2(1.0, 1.0)), "end point {:?}", seg.end);
        assert_eq!(seg.x_axis_rotation, 0.0);
        assert!(!seg.large_arc);
        assert!(seg.sweep);

        // Full circle around (0,1) plus the end point
        assert!(approx(path.bounds.min.x, -1.0));
        assert!(approx(path.bounds.max.x, 1.0));
        assert!(approx(path.bounds.min.y, 0.0));
        assert!(approx(path.bounds.max.y, 2.0));
        assert_eq!(path.final_heading.degrees(), 90.0);
    }

    #[test]
    fn step_is_pure() {
        let state = TraversalState::initial();
        let first = step(state, 3.0);
        let second = step(state, 3.0);
        assert_eq!(first, second);
        assert_eq!(state, TraversalState::initial());
    }

    #[test]
    fn two_arcs_turn_half_way() {
        let path = build_arc_path(&[1.0, 1.0]);
        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.final_heading.degrees(), 180.0);
        assert!(approx_pt(path.end(), dvec2(0.0, 2.0)));

        // The second unit arc shares the first one's circle, so the box
        // cannot shrink; it first grows at the third arc.
        let one = build_arc_path(&[1.0]).bounds;
        assert!(path.bounds.min.x <= one.min.x && path.bounds.min.y <= one.min.y);
        assert!(path.bounds.max.x >= one.max.x && path.bounds.max.y >= one.max.y);

        let three = build_arc_path(&[1.0, 1.0, 2.0]).bounds;
        assert!(three.min.x < path.bounds.min.x || three.min.y < path.bounds.min.y);
    }

    #[test]
    fn five_arcs_match_hand_computed_points() {
        let radii = fibonacci_radii(5).unwrap();
        let path = build_arc_path(&radii);
        let ends: Vec<DVec2> = path.segments.iter().map(|s| s.end).collect();
        let expected = [
            dvec2(1.0, 1.0),
            dvec2(0.0, 2.0),
            dvec2(-2.0, 0.0),
            dvec2(1.0, -3.0),
            dvec2(6.0, 2.0),
        ];
        for (got, want) in ends.iter().zip(expected.iter()) {
            assert!(approx_pt(*got, *want), "got {got:?}, want {want:?}");
        }
        assert!(approx(path.bounds.min.x, -4.0));
        assert!(approx(path.bounds.max.x, 6.0));
        assert!(approx(path.bounds.min.y, -3.0));
        assert!(approx(path.bounds.max.y, 7.0));
    }

    #[test]
    fn chain_is_connected_and_quarter_turns() {
        for n in 1..=50 {
            let radii = fibonacci_radii(n).unwrap();
            let path = build_arc_path(&radii);
            assert_eq!(path.segments.len(), n as usize);
            assert_eq!(
                path.final_heading.degrees(),
                ((90 * n) % 360) as f64,
                "n={n}"
            );

            let mut start = DVec2::ZERO;
            for seg in &path.segments {
                // Start point lies on the arc's circle at start_angle
                let tol = seg.radius * 1e-9 + EPS;
                let rad = seg.start_angle.to_radians();
                let on_circle = seg.center + dvec2(rad.cos(), rad.sin()) * seg.radius;
                assert!((on_circle - start).length() < tol, "n={n} disconnected");
                assert_eq!(seg.end_angle, seg.start_angle + 90.0);
                start = seg.end;
            }
        }
    }

    #[test]
    fn bounds_enclose_circles_and_endpoints() {
        for n in 1..=50 {
            let radii = fibonacci_radii(n).unwrap();
            let path = build_arc_path(&radii);
            let b = path.bounds;
            assert!(b.contains(DVec2::ZERO, 0.0));
            for seg in &path.segments {
                let tol = seg.radius * 1e-12;
                assert!(b.contains(seg.end, tol));
                assert!(b.contains(seg.center - DVec2::splat(seg.radius), tol));
                assert!(b.contains(seg.center + DVec2::splat(seg.radius), tol));
            }
        }
    }
}
