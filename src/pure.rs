use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns a clone of its value
pub struct PReturn<T> {
    value: T,
}

impl<T> PReturn<T> {
    pub fn new(value: T) -> Self {
        PReturn { value }
    }
}

impl<'code, T> Parser<'code> for PReturn<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        Ok(Parsed::empty(cursor.idx(), self.value.clone()))
    }
}

/// Parser that always fails at the cursor with a fixed message
pub struct PFail<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> PFail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        PFail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for PFail<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        Err(ParseError::new(cursor.idx(), self.message.clone()))
    }
}

/// Convenience function to create a PReturn parser
pub fn preturn<T>(value: T) -> PReturn<T>
where
    T: Clone,
{
    PReturn::new(value)
}

/// Convenience function to create a PFail parser
pub fn pfail<T>(message: impl Into<Cow<'static, str>>) -> PFail<T> {
    PFail::new(message)
}
