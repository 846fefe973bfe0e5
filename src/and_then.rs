use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};

/// Run `first`, then `second` from exactly where `first` ended
///
/// Either failure short-circuits. On success the range spans both parsers.
fn parse_pair<'code, P1, P2>(
    first: &P1,
    second: &P2,
    cursor: Cursor<'code>,
) -> ParseResult<(P1::Output, P2::Output)>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    let left = first.parse(cursor)?;
    let right = second.parse(cursor.goto(left.range.end))?;
    Ok(Parsed {
        range: left.range.merge(right.range),
        value: (left.value, right.value),
    })
}

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and_then()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The nested
/// shape is explicit about the parsing order; reach for
/// [`sequence`](crate::sequence::sequence) when many steps are involved.
///
/// Example:
/// ```
/// use textcomb::and_then::AndThenExt;
/// use textcomb::primitives::pstr;
/// use textcomb::{Cursor, Parser, Range};
///
/// let cursor = Cursor::new("key=value");
/// let parsed = pstr("key")
///     .and_then(pstr("="))
///     .and_then(pstr("value"))
///     .parse(cursor)
///     .unwrap();
/// let ((key, _), value) = parsed.value;
/// assert_eq!(key, "key");
/// assert_eq!(value, "value");
/// assert_eq!(parsed.range, Range::new(0, 9));
/// ```
pub struct AndThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> AndThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        AndThen { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for AndThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        parse_pair(&self.parser1, &self.parser2, cursor)
    }
}

/// Sequence two parsers and keep only the left value
pub struct KeepLeft<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> KeepLeft<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        KeepLeft { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for KeepLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        parse_pair(&self.parser1, &self.parser2, cursor).map(|parsed| parsed.map(|(left, _)| left))
    }
}

/// Sequence two parsers and keep only the right value
pub struct KeepRight<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> KeepRight<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        KeepRight { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for KeepRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        parse_pair(&self.parser1, &self.parser2, cursor)
            .map(|parsed| parsed.map(|(_, right)| right))
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<'code, P1, P2>(parser1: P1, parser2: P2) -> AndThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    AndThen::new(parser1, parser2)
}

/// Convenience function to create a KeepLeft parser
pub fn keep_left<'code, P1, P2>(parser1: P1, parser2: P2) -> KeepLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    KeepLeft::new(parser1, parser2)
}

/// Convenience function to create a KeepRight parser
pub fn keep_right<'code, P1, P2>(parser1: P1, parser2: P2) -> KeepRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    KeepRight::new(parser1, parser2)
}

/// Extension trait to add .and_then(), .keep_left() and .keep_right() method support for parsers
pub trait AndThenExt<'code>: Parser<'code> + Sized {
    fn and_then<P>(self, other: P) -> AndThen<Self, P>
    where
        P: Parser<'code>,
    {
        AndThen::new(self, other)
    }

    fn keep_left<P>(self, other: P) -> KeepLeft<Self, P>
    where
        P: Parser<'code>,
    {
        KeepLeft::new(self, other)
    }

    fn keep_right<P>(self, other: P) -> KeepRight<Self, P>
    where
        P: Parser<'code>,
    {
        KeepRight::new(self, other)
    }
}

/// Implement AndThenExt for all parsers
impl<'code, P> AndThenExt<'code> for P where P: Parser<'code> {}
