use serde::Serialize;

/// A [`Span`] is a contiguous byte range `lo..hi` of the parsed input. Every [`Value`] carries
/// the span it was recognized from, so `&input[span.lo..span.hi]` is always its raw text. The
/// invariant `lo <= hi` is maintained by [`Span::new`].
///
/// [`Value`]: crate::Value
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub lo: usize,
    pub hi: usize,
}

impl Span {
    /// Construct a new span. Will panic if `lo > hi`.
    pub const fn new(lo: usize, hi: usize) -> Self {
        assert!(lo <= hi, "`lo` must not be larger than `hi`");
        Span { lo, hi }
    }

    /// The span starting at `pos` and covering `len` bytes.
    pub const fn at(pos: usize, len: usize) -> Self {
        Span::new(pos, pos + len)
    }

    pub const fn len(&self) -> usize {
        self.hi - self.lo
    }

    pub const fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    pub const fn into_range(self) -> std::ops::Range<usize> {
        self.lo..self.hi
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.into_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_covers_len_bytes() {
        let span = Span::at(3, 4);
        assert_eq!(span, Span::new(3, 7));
        assert_eq!(span.len(), 4);
        assert_eq!(span.into_range(), 3..7);
    }

    #[test]
    #[should_panic(expected = "`lo` must not be larger than `hi`")]
    fn inverted_span_panics() {
        let _ = Span::new(2, 1);
    }
}
