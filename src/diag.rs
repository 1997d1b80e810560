//! Fatal error reporting.
//!
//! When the program can't do its one job there is nothing to recover to, so
//! failures are reported once, on standard error, and the process exits with
//! [`FATAL_EXIT_CODE`]. Reporting never touches standard output.

use crate::{program, stdio};
use std::fmt;

/// The status the program exits with after reporting a fatal error.
pub const FATAL_EXIT_CODE: i32 = 255;

/// Report a fatal error and exit the program.
///
/// Takes `format!`-style arguments. The message is written to standard
/// error with an `error: ` prefix; callers should interpolate the OS error
/// into the message so that the underlying cause is visible.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::diag::fatal(core::format_args!($($arg)*))
    };
}

/// Implementation detail of [`fatal!`].
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    let msg = format!("error: {args}\n");

    // Failures here are ignored; there is nowhere left to report them.
    let _ = stdio::write_all(rustix::stdio::stderr(), msg.as_bytes());

    program::exit(FATAL_EXIT_CODE)
}
