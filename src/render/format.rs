//! Numeric formatting contract for emitted documents.
//!
//! Every number written into a document goes through one of these functions,
//! so the output is byte-stable regardless of float `Display` defaults:
//!
//! | quantity                                   | decimals |
//! |--------------------------------------------|----------|
//! | transform translation (`tx`, `ty`), scale  | 6        |
//! | canvas width, height, viewBox              | 6        |
//! | world coordinates and radii                | 3        |
//! | stroke widths                              | 2        |
//!
//! Arc rotation and flags are written as integers by
//! [`fibspiral_svg::PathData::format_with`].
//!
//! Values that round to zero are written without a sign (`0.000`, never
//! `-0.000`). This deliberately departs from the original printf-style
//! output, which kept the sign (`translate(1.000, -0.000)` for n=1).

pub const TRANSFORM_DECIMALS: usize = 6;
pub const DIMENSION_DECIMALS: usize = 6;
pub const COORD_DECIMALS: usize = 3;
pub const STROKE_DECIMALS: usize = 2;

/// Fixed-point formatting with a normalized sign for zero
pub fn fmt_fixed(value: f64, decimals: usize) -> String {
    let mut s = format!("{:.prec$}", value, prec = decimals);
    if s.starts_with('-') && s[1..].bytes().all(|b| b == b'0' || b == b'.') {
        s.remove(0);
    }
    s
}

pub fn fmt_coord(value: f64) -> String {
    fmt_fixed(value, COORD_DECIMALS)
}

pub fn fmt_transform(value: f64) -> String {
    fmt_fixed(value, TRANSFORM_DECIMALS)
}

pub fn fmt_dimension(value: f64) -> String {
    fmt_fixed(value, DIMENSION_DECIMALS)
}

pub fn fmt_stroke(value: f64) -> String {
    fmt_fixed(value, STROKE_DECIMALS)
}

/// Float formatter handed to facet-xml; every `f64` attribute is a coordinate
pub(crate) fn write_coord(
    value: f64,
    writer: &mut dyn std::io::Write,
) -> Result<(), std::io::Error> {
    write!(writer, "{}", fmt_coord(value))
}
