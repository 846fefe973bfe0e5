use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::{ParseResult, Parsed};
use crate::sequence::Sequencer;
use std::marker::PhantomData;
use tracing::trace;

/// Loop-local state shared between iterations of a [`for_each`] body
///
/// Created fresh for every run of the loop and consumed when it ends.
#[derive(Debug)]
pub struct ForState<Item> {
    stop_requested: bool,
    accumulator: String,
    items: Vec<Item>,
}

impl<Item> ForState<Item> {
    fn new() -> Self {
        ForState {
            stop_requested: false,
            accumulator: String::new(),
            items: Vec::new(),
        }
    }

    /// End the loop once the current iteration's body returns
    pub fn stop(&mut self) {
        self.stop_requested = true;
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested
    }

    pub fn append_to_accumulator(&mut self, text: &str) {
        self.accumulator.push_str(text);
    }

    pub fn append_char(&mut self, ch: char) {
        self.accumulator.push(ch);
    }

    pub fn accumulator(&self) -> &str {
        &self.accumulator
    }

    pub fn yield_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Record the accumulator's current content as one more item
    ///
    /// The accumulator is not cleared.
    pub fn yield_accumulator_snapshot(&mut self)
    where
        Item: From<String>,
    {
        self.items.push(Item::from(self.accumulator.clone()));
    }

    fn finish(self) -> ForOutput<Item> {
        ForOutput {
            accumulated: self.accumulator,
            items: self.items,
        }
    }
}

/// What a [`for_each`] loop produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForOutput<Item> {
    pub accumulated: String,
    pub items: Vec<Item>,
}

/// Loop driver: parse greedily with `condition`, running `body` on each match
///
/// Each iteration:
/// - runs `condition` from the current offset; if it fails the loop ends
///   successfully with what was gathered so far
/// - runs `body` with the condition's value and a [`Sequencer`] positioned
///   after the condition; a body failure fails the whole loop
/// - ends the loop if the body called [`ForState::stop`] or the input is
///   exhausted
/// - otherwise continues from where the body stopped, or one char further if
///   the iteration consumed nothing, so every iteration makes progress
pub struct ForEach<C, B, Item> {
    condition: C,
    body: B,
    _items: PhantomData<fn() -> Item>,
}

impl<C, B, Item> ForEach<C, B, Item> {
    pub fn new(condition: C, body: B) -> Self {
        ForEach {
            condition,
            body,
            _items: PhantomData,
        }
    }
}

impl<'code, C, B, Item> Parser<'code> for ForEach<C, B, Item>
where
    C: Parser<'code>,
    B: Fn(&mut ForState<Item>, C::Output, &mut Sequencer<'code>) -> Result<(), ParseError>,
{
    type Output = ForOutput<Item>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<Self::Output> {
        let mut state = ForState::new();
        let mut current = cursor;

        loop {
            let iteration_start = current.idx();

            let matched = match self.condition.parse(current) {
                Ok(matched) => matched,
                Err(error) => {
                    trace!(idx = iteration_start, %error, "loop condition failed, stopping");
                    break;
                }
            };

            let mut seq = Sequencer::new(current.goto(matched.range.end));
            (self.body)(&mut state, matched.value, &mut seq)?;
            current = seq.cursor();

            if state.stop_requested || current.is_at_end() {
                break;
            }
            if current.idx() > iteration_start {
                continue;
            }
            if !current.can_walk_forward(1) {
                break;
            }
            trace!(idx = iteration_start, "iteration consumed nothing, forcing one char forward");
            current = current.walk_forward(1);
        }

        Ok(Parsed::new(cursor.idx(), current.idx(), state.finish()))
    }
}

/// Convenience function to create a ForEach loop
pub fn for_each<'code, C, B, Item>(condition: C, body: B) -> ForEach<C, B, Item>
where
    C: Parser<'code>,
    B: Fn(&mut ForState<Item>, C::Output, &mut Sequencer<'code>) -> Result<(), ParseError>,
{
    ForEach::new(condition, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attempt::pattempt;
    use crate::primitives::{any_char, pchar, pstr};
    use crate::range::Range;

    #[test]
    fn test_body_stop_on_first_non_matching_char() {
        let parser = for_each(any_char(), |state: &mut ForState<String>, ch, _| {
            if matches!(ch, 'a' | 'b' | 'c') {
                state.append_char(ch);
            } else {
                state.stop();
            }
            Ok(())
        });

        let parsed = parser.parse(Cursor::new("abcdeaXabb")).unwrap();
        assert_eq!(parsed.value.accumulated, "abc");
        // the char that triggered the stop was read by the condition
        assert_eq!(parsed.range, Range::new(0, 4));
    }

    #[test]
    fn test_body_ignores_others_and_stops_at_marker() {
        let parser = for_each(any_char(), |state: &mut ForState<String>, ch, _| {
            match ch {
                'a' | 'b' | 'c' => state.append_char(ch),
                'X' => state.stop(),
                _ => {}
            }
            Ok(())
        });

        let parsed = parser.parse(Cursor::new("abcdeaXabb")).unwrap();
        assert_eq!(parsed.value.accumulated, "abca");
        assert_eq!(parsed.range.end, 7);
    }

    #[test]
    fn test_condition_failure_ends_loop_successfully() {
        let lower = pchar(|c| c.is_ascii_lowercase(), |c| format!("'{}' is not lowercase", c));
        let parser = for_each(lower, |state: &mut ForState<String>, ch, _| {
            state.append_char(ch);
            Ok(())
        });

        let parsed = parser.parse(Cursor::new("abcDEF")).unwrap();
        assert_eq!(parsed.value.accumulated, "abc");
        assert_eq!(parsed.range, Range::new(0, 3));

        let parsed = parser.parse(Cursor::new("XYZ")).unwrap();
        assert_eq!(parsed.value.accumulated, "");
        assert_eq!(parsed.range, Range::new(0, 0));
    }

    #[test]
    fn test_body_failure_fails_loop() {
        // every item must be followed by ';'
        let parser = for_each(any_char(), |state: &mut ForState<char>, ch, seq| {
            seq.run(&pstr(";"))?;
            state.yield_item(ch);
            Ok(())
        });

        let parsed = parser.parse(Cursor::new("a;b;")).unwrap();
        assert_eq!(parsed.value.items, vec!['a', 'b']);

        let error = parser.parse(Cursor::new("a;bc")).unwrap_err();
        assert_eq!(error.idx(), 3);
    }

    #[test]
    fn test_zero_width_iterations_are_forced_forward() {
        // the condition never consumes, so the governor moves one char per iteration
        let parser = for_each(
            pattempt(any_char()),
            |state: &mut ForState<String>, peeked, _| {
                if let Some(ch) = peeked {
                    state.append_char(ch);
                }
                Ok(())
            },
        );

        let parsed = parser.parse(Cursor::new("xyz")).unwrap();
        assert_eq!(parsed.value.accumulated, "xyz");
        assert_eq!(parsed.range, Range::new(0, 3));
    }

    #[test]
    fn test_zero_width_at_end_terminates() {
        let parser = for_each(pattempt(any_char()), |_: &mut ForState<String>, _, _| Ok(()));
        let parsed = parser.parse(Cursor::new("")).unwrap();
        assert_eq!(parsed.range, Range::new(0, 0));
    }

    #[test]
    fn test_snapshots_and_items() {
        // split on ',' while also collecting the running text
        let parser = for_each(any_char(), |state: &mut ForState<String>, ch, _| {
            if ch == ',' {
                state.yield_accumulator_snapshot();
            } else {
                state.append_char(ch);
            }
            Ok(())
        });

        let parsed = parser.parse(Cursor::new("ab,c,d")).unwrap();
        assert_eq!(parsed.value.items, vec!["ab".to_string(), "abc".to_string()]);
        assert_eq!(parsed.value.accumulated, "abcd");
    }

    #[test]
    fn test_state_is_fresh_per_run() {
        let parser = for_each(any_char(), |state: &mut ForState<String>, ch, _| {
            state.append_to_accumulator(&ch.to_string());
            Ok(())
        });

        assert_eq!(parser.parse(Cursor::new("ab")).unwrap().value.accumulated, "ab");
        assert_eq!(parser.parse(Cursor::new("cd")).unwrap().value.accumulated, "cd");
    }
}
