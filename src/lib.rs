//! Fibonacci spiral renderer.
//!
//! Turns a term count `n` into an SVG drawing of the quarter-circle
//! approximation of the golden spiral: arcs with radii 1, 1, 2, 3, 5, ...
//! chained end to end, fitted onto a fixed 450×450 canvas over a light grid
//! and a pair of axes.
//!
//! ```rust
//! let svg = fibspiral::render_spiral(8).unwrap();
//! assert!(svg.contains("non-scaling-stroke"));
//!
//! let err = fibspiral::render_spiral_from_input(Some("abc")).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid n format (use numbers only).");
//! ```

pub mod errors;
pub mod input;
pub mod log;
pub mod render;
pub mod types;

pub use errors::RenderError;
pub use input::parse_count;
pub use render::{CanvasSpec, Spiral};
pub use types::TermCount;

/// Render an `n`-term spiral on the default canvas.
///
/// `n` must be in 1..=50; anything else is `OutOfRange` and no partial
/// document is produced. The output is deterministic: the same `n` always
/// yields the same bytes.
pub fn render_spiral(n: i64) -> Result<String, RenderError> {
    render::render_with(n, &CanvasSpec::DEFAULT)
}

/// Render on a custom canvas. The canvas is validated first.
pub fn render_spiral_with(n: i64, canvas: &CanvasSpec) -> Result<String, RenderError> {
    render::render_with(n, canvas)
}

/// Validate a raw request value and render it on the default canvas
pub fn render_spiral_from_input(raw: Option<&str>) -> Result<String, RenderError> {
    let count = parse_count(raw)?;
    render_spiral(count.get() as i64)
}
