use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Monadic bind: run a parser, then use its value to choose the next parser
///
/// The next parser starts where the first one ended. The reported range is
/// whatever the second parser reports; use
/// [`and_then`](crate::and_then::AndThenExt::and_then) when the combined range
/// is needed.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let parsed = self.parser.parse(cursor)?;
        let next = (self.binder)(parsed.value);
        next.parse(cursor.goto(parsed.range.end))
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, binder)
    }
}

impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
