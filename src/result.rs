use crate::error::ParseError;
use crate::range::Range;
use std::borrow::Cow;

/// A successful parse step: the value produced and the range it consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub range: Range,
    pub value: T,
}

impl<T> Parsed<T> {
    /// Success covering `[start, end)`
    pub fn new(start: usize, end: usize, value: T) -> Self {
        Parsed {
            range: Range::new(start, end),
            value,
        }
    }

    /// Zero-width success at `idx`
    pub fn empty(idx: usize, value: T) -> Self {
        Parsed::new(idx, idx, value)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            range: self.range,
            value: f(self.value),
        }
    }
}

/// Outcome of running a parser: exactly one of success or failure
pub type ParseResult<T> = Result<Parsed<T>, ParseError>;

/// Build a successful result covering `[start, end)`
pub fn ok<T>(start: usize, end: usize, value: T) -> ParseResult<T> {
    Ok(Parsed::new(start, end, value))
}

/// Build a failed result at `idx`
pub fn fail<T>(idx: usize, message: impl Into<Cow<'static, str>>) -> ParseResult<T> {
    Err(ParseError::new(idx, message))
}
