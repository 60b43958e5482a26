//! Request boundary: turns the raw `n` field of a request into a term count.

use crate::errors::RenderError;
use crate::types::TermCount;

/// Parse and range-check a raw `n` value.
///
/// Surrounding whitespace is ignored. Absent or blank input is
/// `MissingInput`, anything that is not a base-10 integer is `NotANumber`,
/// and integers outside 1..=50 are `OutOfRange`.
///
/// Counts are read as 32-bit integers: text that overflows `i32` (such as
/// `"3000000000"`) is `NotANumber`, not `OutOfRange`.
pub fn parse_count(raw: Option<&str>) -> Result<TermCount, RenderError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(RenderError::MissingInput);
    }
    let n: i32 = trimmed.parse().map_err(|_| RenderError::NotANumber {
        input: trimmed.to_string(),
    })?;
    TermCount::try_new(i64::from(n))
}
