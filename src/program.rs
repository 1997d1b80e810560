//! Program exit.

/// The status the program exits with when every step succeeds.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit the program with the given status.
///
/// This terminates the process without unwinding; no destructors for live
/// values run.
pub fn exit(status: i32) -> ! {
    log::trace!(target: "hello::program", "exiting with status {}", status);

    std::process::exit(status)
}
