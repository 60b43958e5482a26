//! Facet-derived types for the SVG subset fibspiral emits.
//!
//! The same types serialize rendered documents with `facet-xml` and parse
//! them back in tests.
//!
//! # Example
//!
//! ```rust
//! use fibspiral_svg::{Svg, facet_xml};
//!
//! let svg_str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
//!     <line x1="0" y1="0" x2="10" y2="10" stroke="#000"/>
//! </svg>"##;
//!
//! let svg: Svg = facet_xml::from_str(svg_str).unwrap();
//! assert_eq!(svg.children.len(), 1);
//! ```

use facet::Facet;
use facet_xml as xml;

mod path;

pub use path::{PathCommand, PathData};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any SVG node we emit
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "path")]
    Path(Path),
}

/// SVG group element (`<g>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Group {
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<f64>,
    #[facet(xml::attribute)]
    pub y1: Option<f64>,
    #[facet(xml::attribute)]
    pub x2: Option<f64>,
    #[facet(xml::attribute)]
    pub y2: Option<f64>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "vector-effect")]
    pub vector_effect: Option<String>,
    #[facet(xml::attribute, rename = "shape-rendering")]
    pub shape_rendering: Option<String>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
    #[facet(xml::attribute, rename = "vector-effect")]
    pub vector_effect: Option<String>,
}

/// Common stroke attributes shared by the stroked elements
pub trait StrokeAttrs {
    fn stroke(&self) -> Option<&str>;
    fn stroke_width(&self) -> Option<&str>;
    fn vector_effect(&self) -> Option<&str>;

    /// Whether the stroke keeps its device-pixel width under transforms
    fn is_non_scaling(&self) -> bool {
        self.vector_effect() == Some("non-scaling-stroke")
    }
}

macro_rules! impl_stroke_attrs {
    ($($ty:ty),*) => {
        $(
            impl StrokeAttrs for $ty {
                fn stroke(&self) -> Option<&str> { self.stroke.as_deref() }
                fn stroke_width(&self) -> Option<&str> { self.stroke_width.as_deref() }
                fn vector_effect(&self) -> Option<&str> { self.vector_effect.as_deref() }
            }
        )*
    };
}

impl_stroke_attrs!(Line, Path);

// Re-export facet_xml for convenience
pub use facet_xml;
