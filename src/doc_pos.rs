use crate::error::CursorError;

/// A flat offset resolved to a 1-based line and column.
///
/// Lines are separated by `'\n'`; columns count `char`s, so a `'\r'` before a
/// newline occupies a column of its own. Positions are derived on demand by
/// scanning from the start of the text and never stored by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocPos {
    pub idx: usize,
    pub ln: usize,
    pub col: usize,
}

impl DocPos {
    /// Resolve `idx` within `text`
    ///
    /// # Panics
    ///
    /// Panics if `idx` is greater than the number of `char`s in `text`.
    pub fn create(idx: usize, text: &str) -> Self {
        Self::try_create(idx, text).unwrap_or_else(|error| panic!("{error}"))
    }

    pub fn try_create(idx: usize, text: &str) -> Result<Self, CursorError> {
        let mut ln = 1;
        let mut col = 1;
        let mut seen = 0;

        for ch in text.chars() {
            if seen == idx {
                break;
            }
            if ch == '\n' {
                ln += 1;
                col = 1;
            } else {
                col += 1;
            }
            seen += 1;
        }

        if seen < idx {
            return Err(CursorError::OutOfRange {
                requested: idx,
                current: 0,
                len: seen,
            });
        }

        Ok(Self { idx, ln, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, 1, 1)]
    #[case("abc", 0, 1, 1)]
    #[case("abc", 2, 1, 3)]
    #[case("abc", 3, 1, 4)]
    #[case("ab\ncd", 2, 1, 3)]
    #[case("ab\ncd", 3, 2, 1)]
    #[case("ab\ncd", 5, 2, 3)]
    #[case("a\n\nb", 3, 3, 1)]
    #[case("hello\n", 6, 2, 1)]
    #[case("über\nx", 4, 1, 5)]
    #[case("über\nx", 6, 2, 2)]
    fn test_create(#[case] text: &str, #[case] idx: usize, #[case] ln: usize, #[case] col: usize) {
        assert_eq!(DocPos::create(idx, text), DocPos { idx, ln, col });
    }

    #[test]
    fn test_carriage_return_takes_a_column() {
        let pos = DocPos::create(2, "a\r\nb");
        assert_eq!((pos.ln, pos.col), (1, 3));
        let pos = DocPos::create(3, "a\r\nb");
        assert_eq!((pos.ln, pos.col), (2, 1));
    }

    #[test]
    fn test_out_of_range_is_error() {
        let result = DocPos::try_create(4, "abc");
        assert_eq!(
            result,
            Err(CursorError::OutOfRange {
                requested: 4,
                current: 0,
                len: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "cannot move to offset 10")]
    fn test_create_panics_out_of_range() {
        DocPos::create(10, "short");
    }
}
