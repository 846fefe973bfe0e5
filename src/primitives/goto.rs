use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};

/// Relocates the cursor to an explicit offset
///
/// The range covers everything skipped. Offsets behind the cursor or past
/// the end of the input fail as a parse error.
pub struct Goto {
    idx: usize,
}

impl<'code> Parser<'code> for Goto {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        if !cursor.can_goto(self.idx) {
            return Err(ParseError::new(
                cursor.idx(),
                format!(
                    "cannot move to offset {} from offset {} (text length {})",
                    self.idx,
                    cursor.idx(),
                    cursor.text_len()
                ),
            ));
        }
        Ok(Parsed::new(cursor.idx(), self.idx, ()))
    }
}

pub fn pgoto(idx: usize) -> Goto {
    Goto { idx }
}
