use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};

/// Half-open interval `[start, end)` of char offsets consumed by a parse step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {start} is past its end {end}");
        Range { start, end }
    }

    /// Zero-width range at `idx`
    pub fn empty(idx: usize) -> Self {
        Range::new(idx, idx)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Start of `self`, end of `other`
    pub fn merge(self, other: Range) -> Range {
        Range::new(self.start, other.end)
    }

    /// The text covered by this range
    ///
    /// Offsets past the end of `text` are clamped to its end.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let byte_at = |idx: usize| {
            text.char_indices()
                .nth(idx)
                .map_or(text.len(), |(offset, _)| offset)
        };
        &text[byte_at(self.start)..byte_at(self.end)]
    }
}

/// Combinator that pairs a parser's value with the range it consumed
pub struct WithRange<P> {
    parser: P,
}

impl<P> WithRange<P> {
    pub fn new(parser: P) -> Self {
        WithRange { parser }
    }
}

impl<'code, P> Parser<'code> for WithRange<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Range);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let parsed = self.parser.parse(cursor)?;
        let range = parsed.range;
        Ok(Parsed {
            range,
            value: (parsed.value, range),
        })
    }
}

/// Extension trait to add range capture to any parser
pub trait RangeExt<'code>: Parser<'code> + Sized {
    fn with_range(self) -> WithRange<Self> {
        WithRange::new(self)
    }
}

impl<'code, P> RangeExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a WithRange combinator
pub fn with_range<P>(parser: P) -> WithRange<P> {
    WithRange::new(parser)
}
