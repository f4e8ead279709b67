//! `fptour-interop` — safe wrappers around partial and failing operations.
//!
//! Lookups that may find nothing return `Option`; operations that may fail with
//! a cause return `Result`. Nothing here panics or lets a failure escape as
//! control flow: parse errors and caught panics are converted to data at the
//! point where they occur.

pub mod error;
pub mod option;
pub mod outcome;

pub use error::{CaughtPanic, ParseError, ParseErrorKind};
pub use option::{find_first, find_index, from_predicate, get_or_else_option, lookup, match_option};
pub use outcome::{get_or_else, get_or_else_with, match_result, parse, parse_as, try_catch};
