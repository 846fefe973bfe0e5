use crate::cursor::Cursor;
use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to a result. On success the
/// result's range starts at the cursor and its end is where parsing may
/// continue; on failure nothing is consumed, since the caller still holds the
/// cursor it passed in.
pub trait Parser<'code> {
    type Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output>;
}

/// Plain functions and closures are parsers
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(Cursor<'code>) -> ParseResult<T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<T> {
        self(cursor)
    }
}

/// Type-erased parser, for alternatives of different concrete types and for
/// recursive grammars
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<T> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
