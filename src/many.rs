use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};
use tracing::trace;

/// Parser combinator that matches `min` or more occurrences of the given parser
///
/// Repetition stops when the parser fails or when it succeeds without
/// consuming anything; the zero-width value is still collected. The latter
/// guarantees progress for parsers that can match the empty string.
pub struct ManyN<P> {
    min: usize,
    parser: P,
}

impl<P> ManyN<P> {
    pub fn new(min: usize, parser: P) -> Self {
        ManyN { min, parser }
    }
}

impl<'code, P> Parser<'code> for ManyN<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let mut results = Vec::new();
        let mut current = cursor;

        // Many matches zero or more, so the terminating error is not propagated
        while let Ok(parsed) = self.parser.parse(current) {
            results.push(parsed.value);
            if parsed.range.end <= current.idx() {
                trace!(idx = current.idx(), "zero-width repetition, stopping");
                break;
            }
            current = current.goto(parsed.range.end);
        }

        if results.len() < self.min {
            return Err(ParseError::new(
                current.idx(),
                format!(
                    "expected at least {} occurrences, found {}",
                    self.min,
                    results.len()
                ),
            ));
        }

        Ok(Parsed::new(cursor.idx(), current.idx(), results))
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// An empty repetition fails at the offset where it started.
pub struct Many1<P> {
    inner: ManyN<P>,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 {
            inner: ManyN::new(0, parser),
        }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let parsed = self.inner.parse(cursor)?;
        if parsed.value.is_empty() {
            return Err(ParseError::new(
                cursor.idx(),
                "expected at least one element",
            ));
        }
        Ok(parsed)
    }
}

/// Concatenates a sequence of string-like values into one `String`
pub struct AsJoinedString<P> {
    parser: P,
}

impl<P> AsJoinedString<P> {
    pub fn new(parser: P) -> Self {
        AsJoinedString { parser }
    }
}

impl<'code, P, I> Parser<'code> for AsJoinedString<P>
where
    P: Parser<'code>,
    P::Output: IntoIterator<Item = I>,
    I: Into<String>,
{
    type Output = String;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let parsed = self.parser.parse(cursor)?;
        Ok(parsed.map(|items| {
            items.into_iter().fold(String::new(), |mut joined, item| {
                let item: String = item.into();
                joined.push_str(&item);
                joined
            })
        }))
    }
}

/// Convenience function to create a ManyN parser
pub fn many_n<'code, P>(min: usize, parser: P) -> ManyN<P>
where
    P: Parser<'code>,
{
    ManyN::new(min, parser)
}

/// Convenience function to match zero or more occurrences
pub fn many<'code, P>(parser: P) -> ManyN<P>
where
    P: Parser<'code>,
{
    ManyN::new(0, parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Convenience function to create an AsJoinedString parser
pub fn as_joined_string<P>(parser: P) -> AsJoinedString<P> {
    AsJoinedString::new(parser)
}

/// Extension trait to add repetition methods to parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> ManyN<Self> {
        ManyN::new(0, self)
    }

    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }

    fn many_n(self, min: usize) -> ManyN<Self> {
        ManyN::new(min, self)
    }

    fn as_joined_string(self) -> AsJoinedString<Self> {
        AsJoinedString::new(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
