//! Leaf parsers that look at the text directly.

pub mod char;
pub mod eoi;
pub mod goto;
pub mod string;

pub use char::{AnyChar, CharParser, any_char, pchar};
pub use eoi::{Eoi, eoi};
pub use goto::{Goto, pgoto};
pub use string::{IsStringParser, pstr};
