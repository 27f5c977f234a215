//! Nesting-depth guard.
//!
//! [`crate::parse`] recurses once per nesting level, so sufficiently deep input overflows the
//! stack. [`check_nesting_depth`] is a flat scan that callers run first to reject such input
//! with a regular error.

use std::fmt;

use tracing::debug;

/// A sensible limit for interactive use.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DepthExceeded {
    pub limit: usize,
    /// Byte offset of the opening bracket that went past `limit`.
    pub offset: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nesting depth exceeds the limit of {} at byte offset {}",
            self.limit, self.offset
        )
    }
}

impl std::error::Error for DepthExceeded {}

/// Returns the deepest `[`/`{` nesting in `input`, or the first opener that goes past `limit`.
///
/// Brackets inside string literals are skipped, honoring backslash escapes. The scan does not
/// validate anything else: unbalanced or otherwise malformed input is left for the parser to
/// reject.
pub fn check_nesting_depth(input: &str, limit: usize) -> Result<usize, DepthExceeded> {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, b) in input.bytes().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    debug!(limit, offset, "nesting depth exceeded");
                    return Err(DepthExceeded { limit, offset });
                }
                max_depth = max_depth.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(max_depth)
}
