use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use tracing::trace;

const NO_MORE_PARSERS: &str = "no more parsers";

/// Left-to-right fold of `or_then` over a list of parsers
///
/// Every alternative starts from the same cursor. When all of them fail the
/// error of the last one attempted is returned; an empty list fails with
/// "no more parsers".
pub struct FirstOf<P> {
    parsers: Vec<P>,
}

impl<P> FirstOf<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        FirstOf { parsers }
    }
}

impl<'code, P> Parser<'code> for FirstOf<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let mut last_error = None;
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(parsed) => return Ok(parsed),
                Err(error) => last_error = Some(error),
            }
        }

        trace!(
            idx = cursor.idx(),
            alternatives = self.parsers.len(),
            "first_of exhausted"
        );
        Err(last_error.unwrap_or_else(|| ParseError::new(cursor.idx(), NO_MORE_PARSERS)))
    }
}

/// Try each parser in order and return the first success
///
/// Unlike [`FirstOf`], the individual errors are dropped: any failure is
/// reported as "no more parsers" at the cursor.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        for parser in &self.parsers {
            if let Ok(parsed) = parser.parse(cursor) {
                return Ok(parsed);
            }
        }

        trace!(
            idx = cursor.idx(),
            alternatives = self.parsers.len(),
            "pchoice exhausted"
        );
        Err(ParseError::new(cursor.idx(), NO_MORE_PARSERS))
    }
}

/// Convenience function to create a FirstOf parser
pub fn first_of<'code, P>(parsers: impl IntoIterator<Item = P>) -> FirstOf<P>
where
    P: Parser<'code>,
{
    FirstOf::new(parsers.into_iter().collect())
}

/// Convenience function to create a Choice parser
pub fn pchoice<'code, P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers.into_iter().collect())
}
