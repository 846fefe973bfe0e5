use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};
use std::borrow::Cow;

/// Handle that runs parsers one after another from a moving offset
///
/// Handed to the bodies of [`sequence`] and
/// [`for_each`](crate::for_each::for_each). Each successful [`run`](Sequencer::run)
/// moves the offset to the end of what was consumed; a failure leaves it
/// where it was and is meant to be propagated with `?`.
#[derive(Debug, Clone, Copy)]
pub struct Sequencer<'code> {
    cursor: Cursor<'code>,
}

impl<'code> Sequencer<'code> {
    pub(crate) fn new(cursor: Cursor<'code>) -> Self {
        Sequencer { cursor }
    }

    pub fn cursor(&self) -> Cursor<'code> {
        self.cursor
    }

    pub fn idx(&self) -> usize {
        self.cursor.idx()
    }

    /// Run `parser` at the current offset and return its value
    pub fn run<P>(&mut self, parser: &P) -> Result<P::Output, ParseError>
    where
        P: Parser<'code> + ?Sized,
    {
        self.run_parsed(parser).map(|parsed| parsed.value)
    }

    /// Like [`run`](Sequencer::run) but keeps the consumed range
    pub fn run_parsed<P>(&mut self, parser: &P) -> ParseResult<P::Output>
    where
        P: Parser<'code> + ?Sized,
    {
        let parsed = parser.parse(self.cursor)?;
        self.cursor = self.cursor.goto(parsed.range.end);
        Ok(parsed)
    }

    /// An error at the current offset, for failing a step on a semantic check
    pub fn fail<T>(&self, message: impl Into<Cow<'static, str>>) -> Result<T, ParseError> {
        Err(ParseError::new(self.cursor.idx(), message))
    }
}

/// Do-block parser: the body drives a [`Sequencer`] through any number of steps
///
/// The first failing step fails the whole block. On success the range spans
/// from where the block started to where the last step ended.
///
/// ```
/// use textcomb::primitives::{any_char, pstr};
/// use textcomb::sequence::sequence;
/// use textcomb::{Cursor, Parser};
///
/// let pair = sequence(|seq| {
///     let key = seq.run(&any_char())?;
///     seq.run(&pstr("="))?;
///     let value = seq.run(&any_char())?;
///     Ok((key, value))
/// });
///
/// let parsed = pair.parse(Cursor::new("a=1;")).unwrap();
/// assert_eq!(parsed.value, ('a', '1'));
/// assert_eq!(parsed.range.end, 3);
/// ```
pub struct Sequence<F> {
    body: F,
}

impl<F> Sequence<F> {
    pub fn new(body: F) -> Self {
        Sequence { body }
    }
}

impl<'code, F, T> Parser<'code> for Sequence<F>
where
    F: Fn(&mut Sequencer<'code>) -> Result<T, ParseError>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let mut seq = Sequencer::new(cursor);
        let value = (self.body)(&mut seq)?;
        Ok(Parsed::new(cursor.idx(), seq.idx(), value))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, F, T>(body: F) -> Sequence<F>
where
    F: Fn(&mut Sequencer<'code>) -> Result<T, ParseError>,
{
    Sequence::new(body)
}
