use crate::doc_pos::DocPos;
use std::borrow::Cow;
use thiserror::Error;

/// A recoverable parse failure.
///
/// Carries the offset (in `char`s) at which the failure was detected, which is
/// not necessarily where the overall parse started, and a human-readable
/// message. Only the deepest registered message is kept; callers may replace
/// it with [`set_error_message`](crate::map_err::set_error_message).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message} (at offset {idx})")]
pub struct ParseError {
    pub idx: usize,
    pub message: Cow<'static, str>,
}

impl ParseError {
    pub fn new(idx: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            idx,
            message: message.into(),
        }
    }

    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message, keeping the offset
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            idx: self.idx,
            message: message.into(),
        }
    }
}

/// Invariant violation when moving a cursor or resolving a position.
///
/// These indicate a combinator-wiring bug, never malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cannot move to offset {requested}: valid offsets are {current}..={len}")]
    OutOfRange {
        requested: usize,
        current: usize,
        len: usize,
    },
}

/// Failure reported by [`run`](crate::run::run), with the offset resolved to a
/// line and column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at line {}, column {}: {message}", .position.ln, .position.col)]
pub struct RunError {
    pub position: DocPos,
    pub message: Cow<'static, str>,
}

impl RunError {
    /// Resolve a [`ParseError`] against the text it was produced from
    ///
    /// Panics if the error's offset lies outside the text.
    pub fn from_parse_error(error: ParseError, text: &str) -> Self {
        Self {
            position: DocPos::create(error.idx, text),
            message: error.message,
        }
    }

    /// Render the error followed by up to two lines of context on either side
    /// of the failing line and a pointer at the failing column.
    pub fn render(&self, text: &str) -> String {
        let mut out = self.to_string();
        out.push_str("\n\n");
        for line in self.context_lines(text) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn context_lines(&self, text: &str) -> Vec<String> {
        let ln = self.position.ln;
        let first = ln.saturating_sub(2).max(1);
        let last = ln + 2;
        let segments: Vec<&str> = text.split('\n').collect();
        let mut lines = Vec::new();

        for (i, content) in segments.iter().enumerate() {
            let current_line = i + 1;
            if current_line < first || current_line > last {
                continue;
            }
            // trailing newline leaves an empty segment; only show it when it is the error line
            if i + 1 == segments.len() && content.is_empty() && current_line != ln {
                continue;
            }

            let prefix = if current_line == ln {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == ln {
                let pointer_offset = prefix.len() + self.position.col - 1;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new(4, "Expected: 'x'");
        assert_eq!(error.to_string(), "Expected: 'x' (at offset 4)");
    }

    #[test]
    fn test_with_message_keeps_offset() {
        let error = ParseError::new(7, "inner").with_message("outer");
        assert_eq!(error.idx(), 7);
        assert_eq!(error.message(), "outer");
    }

    #[test]
    fn test_cursor_error_display() {
        let error = CursorError::OutOfRange {
            requested: 9,
            current: 2,
            len: 5,
        };
        assert_eq!(
            error.to_string(),
            "cannot move to offset 9: valid offsets are 2..=5"
        );
    }

    #[test]
    fn test_run_error_display() {
        let error = RunError::from_parse_error(ParseError::new(8, "Expected: 'y'"), "line1\nline2");
        assert_eq!(
            error.to_string(),
            "syntax error at line 2, column 3: Expected: 'y'"
        );
    }

    #[test]
    fn test_render_points_at_column() {
        let text = "alpha\nbeta\ngamma";
        let error = RunError::from_parse_error(ParseError::new(8, "bad"), text);
        let rendered = error.render(text);

        assert!(rendered.contains("  > 2 | beta"));
        assert!(rendered.contains("    1 | alpha"));
        assert!(rendered.contains("    3 | gamma"));
        // "  > 2 | " is 8 wide, column 3 adds two more
        assert!(rendered.contains(&format!("{}^--- here", " ".repeat(10))));
    }

    #[test]
    fn test_render_at_end_after_newline() {
        let text = "hello\n";
        let error = RunError::from_parse_error(ParseError::new(6, "eof"), text);
        assert_eq!(error.position.ln, 2);
        assert_eq!(error.position.col, 1);

        let rendered = error.render(text);
        assert!(rendered.contains("  > 2 | "));
        assert!(rendered.contains("    1 | hello"));
    }

    #[test]
    fn test_render_empty_text() {
        let error = RunError::from_parse_error(ParseError::new(0, "empty"), "");
        let rendered = error.render("");
        assert!(rendered.contains("line 1, column 1"));
        assert!(rendered.contains("^--- here"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        use crate::range::Range;

        let error = ParseError::new(3, "Expected: 'x'");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"idx":3,"message":"Expected: 'x'"}"#);
        assert_eq!(serde_json::from_str::<ParseError>(&json).unwrap(), error);

        let position = DocPos::create(4, "ab
cd");
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, r#"{"idx":4,"ln":2,"col":2}"#);
        assert_eq!(serde_json::from_str::<DocPos>(&json).unwrap(), position);

        let range = Range::new(1, 4);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":1,"end":4}"#);
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), range);
    }
}
