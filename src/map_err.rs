use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that transforms the error of a parser using a mapping function
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> ParseError,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

/// Replaces the message of a failing parser, keeping the failure offset
#[derive(Debug)]
pub struct SetErrorMessage<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> SetErrorMessage<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        SetErrorMessage {
            parser,
            message: message.into(),
        }
    }
}

impl<'code, P> Parser<'code> for SetErrorMessage<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|error| error.with_message(self.message.clone()))
    }
}

/// Extension trait to add .map_err() and .set_error_message() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError) -> ParseError,
    {
        MapErr::new(self, mapper)
    }

    fn set_error_message(self, message: impl Into<Cow<'static, str>>) -> SetErrorMessage<Self> {
        SetErrorMessage::new(self, message)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a MapErr parser
pub fn map_err<'code, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> ParseError,
{
    MapErr::new(parser, mapper)
}

/// Convenience function to create a SetErrorMessage parser
pub fn set_error_message<'code, P>(
    parser: P,
    message: impl Into<Cow<'static, str>>,
) -> SetErrorMessage<P>
where
    P: Parser<'code>,
{
    SetErrorMessage::new(parser, message)
}
