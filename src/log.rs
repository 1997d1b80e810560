//! Logger initialization.

/// Initialize logging.
///
/// Hooks the `log` facade up to `env_logger`, so `RUST_LOG=trace` shows the
/// program's steps. Call this before anything that logs; messages go to
/// standard error.
pub fn init() {
    env_logger::init();

    // Log the first message, announcing that the program is up.
    log::trace!(target: "hello::program", "program started");
}
