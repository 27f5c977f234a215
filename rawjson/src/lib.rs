//! A structural recognizer for JSON that keeps every node's source text.
//!
//! We deviate from typical parsing/deserialization libraries in that nothing is decoded. A
//! number stays the literal text it was written as, a string keeps its quotes and escapes, and
//! a container keeps its brackets, separators and whitespace. Each [`Value`] borrows exactly the
//! slice of the input it was recognized from, and downstream users decide how much further
//! decoding they want.
//!
//! The grammar is built from two matching primitives and a handful of combinators, see
//! [`matcher`], composed into the productions in [`grammar`].
//!
//! ```
//! use rawjson::{parse, ValueKind};
//!
//! let input = r#"{"a": [1, 2.5e+3]}"#;
//! let (root, len) = parse(input, 0).unwrap();
//! assert_eq!(len, input.len());
//! assert_eq!(root.kind, ValueKind::Object);
//! assert_eq!(root.object_members[0].value.array_members[1].raw, "2.5e+3");
//! ```

mod depth;
pub mod grammar;
pub mod matcher;
mod span;
mod value;

use tracing::{debug, instrument};

pub use depth::{check_nesting_depth, DepthExceeded, DEFAULT_MAX_NESTING_DEPTH};
pub use matcher::{NoMatch, Step};
pub use span::Span;
pub use value::{Pair, Value, ValueKind};

/// Parses one value starting at byte offset `pos`, returning it with the number of bytes
/// consumed. Trailing input after the value is not an error; see [`parse_document`] for
/// whole-buffer validation.
///
/// The parser recurses once per nesting level, so deeply nested input can exhaust the stack.
/// Run untrusted input through [`check_nesting_depth`] first.
#[instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str, pos: usize) -> Step<Value<'_>> {
    let result = grammar::value(input, pos);
    match &result {
        Ok((root, len)) => debug!(kind = root.kind.kind_desc(), len, "parsed"),
        Err(NoMatch) => debug!("no match"),
    }
    result
}

/// Parses `input` as a single value that has to span the whole buffer.
pub fn parse_document(input: &str) -> Result<Value<'_>, NoMatch> {
    match parse(input, 0)? {
        (root, len) if len == input.len() => Ok(root),
        (_, len) => {
            debug!(len, trailing = input.len() - len, "trailing input after value");
            Err(NoMatch)
        }
    }
}
