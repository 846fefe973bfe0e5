//! # TextComb - Parser Combinator Library
//!
//! Composable parsers over an immutable text, addressed by `char` offsets.
//!
//! A [`Parser`] reads from a [`Cursor`] and either succeeds with a value and
//! the [`Range`] it consumed, or fails with a [`ParseError`] carrying the offset
//! of the failure. Parsers are plain values: combinators wrap them into larger
//! parsers and the same parser can be run any number of times. The library
//! emphasizes:
//!
//! - **No hidden state**: cursors are `Copy`, so backtracking is just reusing
//!   an earlier cursor
//! - **Errors as values**: grammar mismatches are `Result`s; panics are kept for
//!   combinator-wiring bugs such as moving a cursor backwards
//! - **Readable failures**: [`run`] resolves failures to a line and column and
//!   can render the surrounding lines
//!
//! ```
//! use textcomb::primitives::{any_char, eoi, pchar, pstr};
//! use textcomb::{AndThenExt, ManyExt, MapExt, run};
//!
//! let digit = pchar(|c| c.is_ascii_digit(), |c| format!("expected digit, found '{}'", c));
//! let number = digit.many1().as_joined_string().map(|s| s.parse::<u32>().unwrap_or(0));
//! let pair = number.keep_left(pstr(",")).and_then(any_char()).keep_left(eoi());
//!
//! assert_eq!(run("42,x", &pair).unwrap(), (42, 'x'));
//!
//! let error = run("42;x", &pair).unwrap_err();
//! assert_eq!((error.position.ln, error.position.col), (1, 3));
//! ```

pub mod and_then;
pub mod attempt;
pub mod bind;
pub mod choice;
pub mod cursor;
pub mod doc_pos;
pub mod error;
pub mod for_each;
pub mod lazy;
pub mod many;
pub mod map;
pub mod map_err;
pub mod not;
pub mod or_then;
pub mod parser;
pub mod primitives;
pub mod pure;
pub mod range;
pub mod result;
pub mod run;
pub mod sequence;

pub use and_then::{AndThenExt, and_then, keep_left, keep_right};
pub use attempt::{AttemptExt, pattempt, pis_err, pis_ok, ptry};
pub use bind::{BindExt, bind};
pub use choice::{first_of, pchoice};
pub use cursor::Cursor;
pub use doc_pos::DocPos;
pub use error::{CursorError, ParseError, RunError};
pub use for_each::{ForOutput, ForState, for_each};
pub use lazy::lazy;
pub use many::{ManyExt, as_joined_string, many, many_n, many1};
pub use map::{MapExt, map};
pub use map_err::{MapErrExt, map_err, set_error_message};
pub use not::{NotExt, pnot};
pub use or_then::{OrThenExt, or_then};
pub use parser::{BoxedExt, BoxedParser, Parser};
pub use pure::{pfail, preturn};
pub use range::{Range, RangeExt, with_range};
pub use result::{ParseResult, Parsed};
pub use run::run;
pub use sequence::{Sequencer, sequence};
