use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};

/// Succeeds without consuming iff the cursor is at the end of the input
pub struct Eoi;

impl<'code> Parser<'code> for Eoi {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        if cursor.is_at_end() {
            Ok(Parsed::empty(cursor.idx(), ()))
        } else {
            Err(ParseError::new(cursor.idx(), "Expected end of input."))
        }
    }
}

pub fn eoi() -> Eoi {
    Eoi
}
