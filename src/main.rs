//! Print a greeting to standard output.
//!
//! Exits with status 0 on success. If standard output cannot be acquired or
//! written, reports the error on standard error and exits with status 255.

use hello::{fatal, program, stdio};
use std::io::Error;

/// The greeting, written verbatim to standard output.
const MESSAGE: &[u8] = b"Hello, World!\n";

fn main() {
    hello::log::init();

    let stdout = match stdio::stdout() {
        Ok(fd) => fd,
        Err(err) => fatal!("failed to acquire standard output: {}", Error::from(err)),
    };

    if let Err(err) = stdio::write_all(stdout, MESSAGE) {
        fatal!("failed to write to standard output: {}", Error::from(err));
    }

    log::trace!(target: "hello::program", "wrote {} bytes", MESSAGE.len());

    program::exit(program::EXIT_SUCCESS)
}
