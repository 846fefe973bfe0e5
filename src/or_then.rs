use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Backtracking is unconditional: the second parser always starts from the
/// original cursor, however far the first one got before failing.
pub struct OrThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> OrThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        OrThen { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for OrThen<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(parsed) => Ok(parsed),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or_then() method support for parsers
pub trait OrThenExt<'code>: Parser<'code> + Sized {
    fn or_then<P>(self, other: P) -> OrThen<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        OrThen::new(self, other)
    }
}

/// Implement OrThenExt for all parsers
impl<'code, P> OrThenExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an OrThen parser
pub fn or_then<'code, P1, P2, O>(parser1: P1, parser2: P2) -> OrThen<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    OrThen::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and_then::AndThenExt;
    use crate::map::MapExt;
    use crate::primitives::pstr;
    use crate::range::Range;

    #[test]
    fn test_or_first_succeeds() {
        let cursor = Cursor::new("abc");
        let parsed = or_then(pstr("a"), pstr("b")).parse(cursor).unwrap();
        assert_eq!(parsed.value, "a");
        assert_eq!(parsed.range, Range::new(0, 1));
    }

    #[test]
    fn test_or_second_succeeds() {
        let cursor = Cursor::new("bcd");
        let parsed = or_then(pstr("a"), pstr("b")).parse(cursor).unwrap();
        assert_eq!(parsed.value, "b");
    }

    #[test]
    fn test_or_both_fail_reports_second() {
        let cursor = Cursor::new("xyz");
        let error = or_then(pstr("a"), pstr("b")).parse(cursor).unwrap_err();
        assert_eq!(error.message(), "Expected: 'b'");
        assert_eq!(error.idx(), 0);
    }

    #[test]
    fn test_or_backtracks_fully() {
        // first branch consumes "abc" before failing on "d"
        let cursor = Cursor::new("abcx");
        let deep = pstr("abc").and_then(pstr("d")).map(|_| "deep");
        let shallow = pstr("ab").map(|_| "shallow");

        let parsed = deep.or_then(shallow).parse(cursor).unwrap();
        assert_eq!(parsed.value, "shallow");
        assert_eq!(parsed.range, Range::new(0, 2));
    }

    #[test]
    fn test_or_method_chain() {
        let cursor = Cursor::new("d");
        let parser = pstr("a")
            .or_then(pstr("b"))
            .or_then(pstr("c"))
            .or_then(pstr("d"));

        let parsed = parser.parse(cursor).unwrap();
        assert_eq!(parsed.value, "d");
        assert_eq!(parsed.range.end, 1);
    }
}
