//! SVG generation
//!
//! The document is one `<svg>` holding a single transformed `<g>`. Inside it
//! the layers are drawn in order: grid, axes, then the spiral on top. All
//! geometry stays in world coordinates; the group transform maps it onto the
//! canvas, and every stroke is non-scaling so line widths stay in device
//! pixels whatever the zoom.

use enum_dispatch::enum_dispatch;
use fibspiral_svg::facet_xml::{self, SerializeOptions};
use fibspiral_svg::{Group, Line, Path, PathData, SVG_NS, Svg, SvgNode};
use glam::{DVec2, dvec2};

use super::defaults::{AXIS_COLOR, CanvasSpec, GRID_COLOR, SPIRAL_COLOR};
use super::format::{fmt_coord, fmt_dimension, fmt_stroke, fmt_transform, write_coord};
use super::path_builder::ArcPath;
use super::viewport::ViewportTransform;
use crate::errors::RenderError;

const NON_SCALING_STROKE: &str = "non-scaling-stroke";

/// Inputs shared by every layer
pub struct LayerContext<'a> {
    pub path: &'a ArcPath,
    pub transform: &'a ViewportTransform,
    pub canvas: &'a CanvasSpec,
}

/// One drawing layer of the document
#[enum_dispatch]
pub trait Layer {
    /// Render this layer to SVG nodes in world coordinates
    fn render_svg(&self, ctx: &LayerContext<'_>) -> Vec<SvgNode>;
}

#[enum_dispatch(Layer)]
#[derive(Debug, Clone, Copy)]
pub enum LayerKind {
    Grid(GridLayer),
    Axes(AxesLayer),
    Spiral(SpiralLayer),
}

/// Draw order, bottom to top
pub const LAYERS: [LayerKind; 3] = [
    LayerKind::Grid(GridLayer),
    LayerKind::Axes(AxesLayer),
    LayerKind::Spiral(SpiralLayer),
];

/// Light reference grid: `grid_steps + 1` lines per direction
#[derive(Debug, Clone, Copy)]
pub struct GridLayer;

impl Layer for GridLayer {
    fn render_svg(&self, ctx: &LayerContext<'_>) -> Vec<SvgNode> {
        let bounds = ctx.path.bounds;
        let steps = ctx.canvas.grid_steps;
        let step = ctx.transform.world_size / f64::from(steps);
        let width = fmt_stroke(ctx.canvas.grid_stroke);

        let mut nodes = Vec::with_capacity(2 * (steps as usize + 1));
        for i in 0..=steps {
            let i = f64::from(i);
            let x = bounds.min.x + i * step.x;
            let y = bounds.min.y + i * step.y;
            nodes.push(SvgNode::Line(grid_line(
                dvec2(bounds.min.x, y),
                dvec2(bounds.max.x, y),
                &width,
            )));
            nodes.push(SvgNode::Line(grid_line(
                dvec2(x, bounds.min.y),
                dvec2(x, bounds.max.y),
                &width,
            )));
        }
        nodes
    }
}

/// Coordinate axes through the origin, spanning the whole bounding box.
///
/// Drawn even when the origin sits on the edge of the box.
#[derive(Debug, Clone, Copy)]
pub struct AxesLayer;

impl Layer for AxesLayer {
    fn render_svg(&self, ctx: &LayerContext<'_>) -> Vec<SvgNode> {
        let bounds = ctx.path.bounds;
        let width = fmt_stroke(ctx.canvas.axis_stroke);
        vec![
            SvgNode::Line(axis_line(
                dvec2(bounds.min.x, 0.0),
                dvec2(bounds.max.x, 0.0),
                &width,
            )),
            SvgNode::Line(axis_line(
                dvec2(0.0, bounds.min.y),
                dvec2(0.0, bounds.max.y),
                &width,
            )),
        ]
    }
}

/// The spiral itself as one continuous path
#[derive(Debug, Clone, Copy)]
pub struct SpiralLayer;

impl Layer for SpiralLayer {
    fn render_svg(&self, ctx: &LayerContext<'_>) -> Vec<SvgNode> {
        let d = spiral_path_data(ctx.path).format_with(fmt_coord);
        vec![SvgNode::Path(Path {
            d: Some(d),
            stroke: Some(SPIRAL_COLOR.to_string()),
            stroke_width: Some(fmt_stroke(ctx.canvas.spiral_stroke)),
            fill: Some("none".to_string()),
            stroke_linecap: Some("round".to_string()),
            vector_effect: Some(NON_SCALING_STROKE.to_string()),
        })]
    }
}

fn grid_line(from: DVec2, to: DVec2, stroke_width: &str) -> Line {
    Line {
        shape_rendering: Some("crispEdges".to_string()),
        ..stroked_line(from, to, GRID_COLOR, stroke_width)
    }
}

fn axis_line(from: DVec2, to: DVec2, stroke_width: &str) -> Line {
    stroked_line(from, to, AXIS_COLOR, stroke_width)
}

fn stroked_line(from: DVec2, to: DVec2, color: &str, stroke_width: &str) -> Line {
    Line {
        x1: Some(from.x),
        y1: Some(from.y),
        x2: Some(to.x),
        y2: Some(to.y),
        stroke: Some(color.to_string()),
        stroke_width: Some(stroke_width.to_string()),
        vector_effect: Some(NON_SCALING_STROKE.to_string()),
        shape_rendering: None,
    }
}

/// Path data for the arc chain: start at the origin, one arc per segment
pub fn spiral_path_data(path: &ArcPath) -> PathData {
    path.segments.iter().fold(PathData::new().m0(), |d, seg| {
        d.a(
            seg.radius,
            seg.radius,
            seg.x_axis_rotation,
            seg.large_arc,
            seg.sweep,
            seg.end.x,
            seg.end.y,
        )
    })
}

/// The group transform, `translate(tx,ty) scale(s) translate(-minX,-minY)`.
///
/// SVG applies the list right to left, so world points are first shifted to
/// the box corner, then scaled, then centered.
pub fn transform_attribute(transform: &ViewportTransform) -> String {
    format!(
        "translate({},{}) scale({}) translate({},{})",
        fmt_transform(transform.translate.x),
        fmt_transform(transform.translate.y),
        fmt_transform(transform.scale),
        fmt_coord(-transform.origin.x),
        fmt_coord(-transform.origin.y)
    )
}

/// Build the document DOM
pub fn build_document(
    path: &ArcPath,
    transform: &ViewportTransform,
    canvas: &CanvasSpec,
) -> Svg {
    let ctx = LayerContext {
        path,
        transform,
        canvas,
    };
    let children = LAYERS
        .iter()
        .flat_map(|layer| layer.render_svg(&ctx))
        .collect();

    let group = Group {
        transform: Some(transform_attribute(transform)),
        children,
    };

    let width = fmt_dimension(canvas.width);
    let height = fmt_dimension(canvas.height);
    Svg {
        xmlns: Some(SVG_NS.to_string()),
        view_box: Some(format!("0 0 {} {}", width, height)),
        width: Some(width),
        height: Some(height),
        children: vec![SvgNode::G(group)],
    }
}

/// Generate the SVG document string
pub fn generate_svg(
    path: &ArcPath,
    transform: &ViewportTransform,
    canvas: &CanvasSpec,
) -> Result<String, RenderError> {
    let svg = build_document(path, transform, canvas);

    // All f64 attributes are world coordinates
    let options = SerializeOptions {
        float_formatter: Some(write_coord),
        ..Default::default()
    };
    facet_xml::to_string_with_options(&svg, &options).map_err(|e| RenderError::Serialization {
        message: e.to_string(),
    })
}
