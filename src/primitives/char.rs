use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};

const EXPECTED_MORE: &str = "Expected more characters, but reached end of input";

/// Parser that consumes and returns a single char
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        match cursor.peek() {
            Some(ch) => Ok(Parsed::new(cursor.idx(), cursor.idx() + 1, ch)),
            None => Err(ParseError::new(cursor.idx(), EXPECTED_MORE)),
        }
    }
}

/// Parser that consumes a single char satisfying a predicate
///
/// When the predicate rejects the char, the error message is built from the
/// char actually found.
pub struct CharParser<F, M> {
    predicate: F,
    error_message: M,
}

impl<F, M> CharParser<F, M> {
    pub fn new(predicate: F, error_message: M) -> Self {
        CharParser {
            predicate,
            error_message,
        }
    }
}

impl<'code, F, M> Parser<'code> for CharParser<F, M>
where
    F: Fn(char) -> bool,
    M: Fn(char) -> String,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        match cursor.peek() {
            Some(ch) if (self.predicate)(ch) => Ok(Parsed::new(cursor.idx(), cursor.idx() + 1, ch)),
            Some(ch) => Err(ParseError::new(cursor.idx(), (self.error_message)(ch))),
            None => Err(ParseError::new(cursor.idx(), EXPECTED_MORE)),
        }
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Convenience function to create a CharParser
pub fn pchar<F, M>(predicate: F, error_message: M) -> CharParser<F, M>
where
    F: Fn(char) -> bool,
    M: Fn(char) -> String,
{
    CharParser::new(predicate, error_message)
}
