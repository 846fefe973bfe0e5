use crate::error::CursorError;

/// Immutable position in an input text
///
/// A cursor is a cheap `Copy` value: a borrowed view of the text plus the
/// current offset. Offsets count `char`s; the matching byte offset is carried
/// alongside so that [`rest`](Cursor::rest) is a zero-copy slice. Every
/// movement produces a new cursor and movement is forward-only, which is what
/// backtracking combinators rely on: they simply keep the cursor they started
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'code> {
    text: &'code str,
    /// Length of `text` in chars
    len: usize,
    idx: usize,
    byte: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(text: &'code str) -> Self {
        Cursor {
            text,
            len: text.chars().count(),
            idx: 0,
            byte: 0,
        }
    }

    /// The whole input, independent of the current position
    pub fn text(&self) -> &'code str {
        self.text
    }

    /// Current offset in chars
    pub fn idx(&self) -> usize {
        self.idx
    }

    /// Length of the whole input in chars
    pub fn text_len(&self) -> usize {
        self.len
    }

    pub fn is_at_end(&self) -> bool {
        self.idx == self.len
    }

    pub fn has_rest(&self) -> bool {
        !self.is_at_end()
    }

    /// The unconsumed suffix of the input
    pub fn rest(&self) -> &'code str {
        &self.text[self.byte..]
    }

    /// The char at the current offset, if any
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Whether `idx` is reachable: not behind the current offset and not past the end
    pub fn can_goto(&self, idx: usize) -> bool {
        idx >= self.idx && idx <= self.len
    }

    pub fn can_walk_forward(&self, n: usize) -> bool {
        self.idx.checked_add(n).is_some_and(|idx| self.can_goto(idx))
    }

    pub fn try_goto(self, idx: usize) -> Result<Self, CursorError> {
        if !self.can_goto(idx) {
            return Err(CursorError::OutOfRange {
                requested: idx,
                current: self.idx,
                len: self.len,
            });
        }

        let byte = self
            .rest()
            .char_indices()
            .nth(idx - self.idx)
            .map_or(self.text.len(), |(offset, _)| self.byte + offset);

        Ok(Cursor {
            idx,
            byte,
            ..self
        })
    }

    /// Move to `idx`
    ///
    /// # Panics
    ///
    /// Panics if `idx` is behind the current offset or past the end of the
    /// input. Combinators validate offsets before moving, so reaching this
    /// means a parser reported a range it never consumed.
    pub fn goto(self, idx: usize) -> Self {
        self.try_goto(idx).unwrap_or_else(|error| panic!("{error}"))
    }

    /// Move forward by `n` chars, with the same contract as [`goto`](Cursor::goto)
    pub fn walk_forward(self, n: usize) -> Self {
        let idx = self.idx.checked_add(n).unwrap_or(usize::MAX);
        self.goto(idx)
    }

    /// Step over `consumed`, which must be a prefix of [`rest`](Cursor::rest)
    pub(crate) fn step_over(self, consumed: &str) -> Self {
        debug_assert!(self.rest().starts_with(consumed));
        Cursor {
            idx: self.idx + consumed.chars().count(),
            byte: self.byte + consumed.len(),
            ..self
        }
    }
}
