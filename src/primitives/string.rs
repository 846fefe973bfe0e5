use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};
use std::borrow::Cow;

/// Parser that matches an exact string, ordinal and case-sensitive
///
/// Consumes exactly as many chars as the expected string has and returns it.
/// On mismatch nothing is consumed and the error points at the cursor.
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsStringParser {
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        if !cursor.rest().starts_with(self.expected.as_ref()) {
            return Err(ParseError::new(
                cursor.idx(),
                format!("Expected: '{}'", self.expected),
            ));
        }

        let next = cursor.step_over(&self.expected);
        Ok(Parsed::new(cursor.idx(), next.idx(), self.expected.clone()))
    }
}

/// Convenience function to create an IsStringParser
pub fn pstr(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Range;
    use rstest::rstest;

    #[test]
    fn test_exact_match() {
        let cursor = Cursor::new("hello");
        let parsed = pstr("hello").parse(cursor).unwrap();
        assert_eq!(parsed.value, "hello");
        assert_eq!(parsed.range, Range::new(0, 5));
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let cursor = Cursor::new("hello world");
        let parsed = pstr("hello").parse(cursor).unwrap();
        assert_eq!(cursor.goto(parsed.range.end).rest(), " world");
    }

    #[test]
    fn test_unicode_string_counts_chars() {
        let cursor = Cursor::new("こんにちは世界");
        let parsed = pstr("こんにちは").parse(cursor).unwrap();
        assert_eq!(parsed.range, Range::new(0, 5));
        assert_eq!(cursor.goto(parsed.range.end).peek(), Some('世'));
    }

    #[test]
    fn test_empty_string_is_zero_width() {
        let cursor = Cursor::new("hello");
        let parsed = pstr("").parse(cursor).unwrap();
        assert_eq!(parsed.value, "");
        assert!(parsed.range.is_empty());
    }

    #[rstest]
    #[case("world")]
    #[case("help")]
    #[case("hel")]
    #[case("")]
    #[case("Hello")]
    fn test_mismatch_fails_at_cursor(#[case] input: &str) {
        let error = pstr("hello").parse(Cursor::new(input)).unwrap_err();
        assert_eq!(error, ParseError::new(0, "Expected: 'hello'"));
    }

    #[test]
    fn test_mismatch_mid_input() {
        let cursor = Cursor::new("let x").goto(4);
        let error = pstr("y").parse(cursor).unwrap_err();
        assert_eq!(error.idx(), 4);
    }

    #[test]
    fn test_owned_expected_string() {
        let keyword = String::from("match");
        let parsed = pstr(keyword.clone()).parse(Cursor::new("match x")).unwrap();
        assert_eq!(parsed.value, keyword);
        assert!(matches!(parsed.value, Cow::Owned(_)));
        assert_eq!(parsed.range, Range::new(0, 5));
    }

    #[rstest]
    #[case("<-")]
    #[case("::")]
    #[case("température")]
    #[case("🚀🦀")]
    fn test_symbols_and_unicode(#[case] symbol: &'static str) {
        let parsed = pstr(symbol).parse(Cursor::new(symbol)).unwrap();
        assert_eq!(parsed.value, symbol);
        assert_eq!(parsed.range.len(), symbol.chars().count());
    }
}
