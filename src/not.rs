use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::new(cursor.idx(), "unexpected")),
            Err(_) => Ok(Parsed::empty(cursor.idx(), ())),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn pnot<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
