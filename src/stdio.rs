//! Handle-based standard I/O.
//!
//! The standard streams are borrowed, not owned: the process inherits them
//! from whoever started it and never closes them. What it *can't* assume is
//! that they're open, so [`stdout`] probes the handle before handing it out.

use rustix::io::{self, Errno};
use std::os::fd::{AsFd, BorrowedFd};

/// Acquire the process's standard-output handle.
///
/// Returns an error if the descriptor is closed or otherwise invalid, such
/// as when the parent process started us with stdout closed.
pub fn stdout() -> io::Result<BorrowedFd<'static>> {
    let fd = rustix::stdio::stdout();

    // Probe the handle; an inherited stream may be closed.
    io::fcntl_getfd(fd)?;

    log::trace!(target: "hello::stdio", "acquired standard output");
    Ok(fd)
}

/// Write every byte of `buf` to `fd`.
///
/// Short writes continue from where they left off, and interrupted writes
/// are retried. Returns `Ok(())` only once the OS has accepted every byte.
pub fn write_all<Fd: AsFd>(fd: Fd, mut buf: &[u8]) -> io::Result<()> {
    let fd = fd.as_fd();
    while !buf.is_empty() {
        match io::write(fd, buf) {
            // A successful write of zero bytes would loop forever.
            Ok(0) => return Err(Errno::IO),
            Ok(n) => buf = &buf[n..],
            Err(Errno::INTR) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
