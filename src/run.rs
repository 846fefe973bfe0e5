use crate::cursor::Cursor;
use crate::error::RunError;
use crate::parser::Parser;
use tracing::debug;

/// Run `parser` over the whole of `text` starting at offset 0
///
/// Returns the parsed value; a failure is resolved to a line and column.
/// Trailing input is not an error; compose with
/// [`eoi`](crate::primitives::eoi) to require it.
pub fn run<'code, P>(text: &'code str, parser: &P) -> Result<P::Output, RunError>
where
    P: Parser<'code> + ?Sized,
{
    let cursor = Cursor::new(text);
    debug!(len = cursor.text_len(), "running parser");

    match parser.parse(cursor) {
        Ok(parsed) => {
            debug!(start = parsed.range.start, end = parsed.range.end, "parse succeeded");
            Ok(parsed.value)
        }
        Err(error) => {
            let error = RunError::from_parse_error(error, text);
            debug!(ln = error.position.ln, col = error.position.col, message = %error.message, "parse failed");
            Err(error)
        }
    }
}
