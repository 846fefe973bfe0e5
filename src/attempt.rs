//! Speculative parsing: run a parser and turn its failure into a value.
//!
//! None of these combinators ever fail. They differ in what they consume:
//!
//! | combinator  | value       | on success      | on failure |
//! |-------------|-------------|-----------------|------------|
//! | `pattempt`  | `Option<T>` | nothing         | nothing    |
//! | `ptry`      | `Option<T>` | what `p` used   | nothing    |
//! | `pis_ok`    | `bool`      | what `p` used   | nothing    |
//! | `pis_err`   | `bool`      | nothing         | nothing    |

use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};

/// Positive lookahead that reports the outcome without consuming input
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let value = self.parser.parse(cursor).ok().map(|parsed| parsed.value);
        Ok(Parsed::empty(cursor.idx(), value))
    }
}

/// Optional parser: consumes on success, zero-width `None` on failure
pub struct Try<P> {
    parser: P,
}

impl<P> Try<P> {
    pub fn new(parser: P) -> Self {
        Try { parser }
    }
}

impl<'code, P> Parser<'code> for Try<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        match self.parser.parse(cursor) {
            Ok(parsed) => Ok(parsed.map(Some)),
            Err(_) => Ok(Parsed::empty(cursor.idx(), None)),
        }
    }
}

/// Reports whether the parser succeeded, advancing past it when it did
pub struct IsOk<P> {
    parser: P,
}

impl<P> IsOk<P> {
    pub fn new(parser: P) -> Self {
        IsOk { parser }
    }
}

impl<'code, P> Parser<'code> for IsOk<P>
where
    P: Parser<'code>,
{
    type Output = bool;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        match self.parser.parse(cursor) {
            Ok(parsed) => Ok(parsed.map(|_| true)),
            Err(_) => Ok(Parsed::empty(cursor.idx(), false)),
        }
    }
}

/// Reports whether the parser failed, never consuming input
pub struct IsErr<P> {
    parser: P,
}

impl<P> IsErr<P> {
    pub fn new(parser: P) -> Self {
        IsErr { parser }
    }
}

impl<'code, P> Parser<'code> for IsErr<P>
where
    P: Parser<'code>,
{
    type Output = bool;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let failed = self.parser.parse(cursor).is_err();
        Ok(Parsed::empty(cursor.idx(), failed))
    }
}

pub fn pattempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

pub fn ptry<'code, P>(parser: P) -> Try<P>
where
    P: Parser<'code>,
{
    Try::new(parser)
}

pub fn pis_ok<'code, P>(parser: P) -> IsOk<P>
where
    P: Parser<'code>,
{
    IsOk::new(parser)
}

pub fn pis_err<'code, P>(parser: P) -> IsErr<P>
where
    P: Parser<'code>,
{
    IsErr::new(parser)
}

/// Extension trait to add .attempt() and .optional() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }

    fn optional(self) -> Try<Self> {
        Try::new(self)
    }
}

impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and_then::AndThenExt;
    use crate::primitives::pstr;
    use crate::range::Range;
    use rstest::rstest;

    #[rstest]
    #[case("abc", Some("ab"))]
    #[case("xyz", None)]
    fn test_pattempt_never_consumes(#[case] input: &str, #[case] expected: Option<&str>) {
        let cursor = Cursor::new(input);
        let parsed = pattempt(pstr("ab")).parse(cursor).unwrap();
        assert_eq!(parsed.value.as_deref(), expected);
        assert_eq!(parsed.range, Range::new(0, 0));
    }

    #[rstest]
    #[case("abc", Some("ab"), 2)]
    #[case("xyz", None, 0)]
    fn test_ptry(#[case] input: &str, #[case] expected: Option<&str>, #[case] end: usize) {
        let cursor = Cursor::new(input);
        let parsed = ptry(pstr("ab")).parse(cursor).unwrap();
        assert_eq!(parsed.value.as_deref(), expected);
        assert_eq!(parsed.range, Range::new(0, end));
    }

    #[test]
    fn test_pis_ok_advances_on_success() {
        let parsed = pis_ok(pstr("ab")).parse(Cursor::new("abc")).unwrap();
        assert!(parsed.value);
        assert_eq!(parsed.range, Range::new(0, 2));

        let parsed = pis_ok(pstr("ab")).parse(Cursor::new("xbc")).unwrap();
        assert!(!parsed.value);
        assert_eq!(parsed.range, Range::new(0, 0));
    }

    #[test]
    fn test_pis_err_never_advances() {
        let parsed = pis_err(pstr("ab")).parse(Cursor::new("abc")).unwrap();
        assert!(!parsed.value);
        assert_eq!(parsed.range, Range::new(0, 0));

        let parsed = pis_err(pstr("ab")).parse(Cursor::new("xbc")).unwrap();
        assert!(parsed.value);
        assert_eq!(parsed.range, Range::new(0, 0));
    }

    #[test]
    fn test_attempt_lookahead_then_consume() {
        // Peek at the sign, then parse it for real
        let cursor = Cursor::new("-5");
        let parsed = pstr("-")
            .attempt()
            .and_then(pstr("-").optional())
            .parse(cursor)
            .unwrap();

        let (peeked, consumed) = parsed.value;
        assert!(peeked.is_some());
        assert!(consumed.is_some());
        assert_eq!(parsed.range, Range::new(0, 1));
    }
}
