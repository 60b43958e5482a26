//! Fibonacci radius sequence

use crate::errors::RenderError;
use crate::types::TermCount;

/// Radii for the first `n` spiral arcs: 1, 1, 2, 3, 5, ...
///
/// `n` is re-validated here so callers that skip the input boundary still
/// get `OutOfRange` instead of an empty or truncated spiral.
pub fn fibonacci_radii(n: i64) -> Result<Vec<f64>, RenderError> {
    let count = TermCount::try_new(n)?;
    Ok(radii_for(count))
}

/// Radii for an already validated term count
pub fn radii_for(count: TermCount) -> Vec<f64> {
    let n = count.get();
    let mut radii: Vec<f64> = Vec::with_capacity(n);
    for i in 0..n {
        let r = if i < 2 { 1.0 } else { radii[i - 1] + radii[i - 2] };
        radii.push(r);
    }
    radii
}
