//! handle-probe: resolve a path to an opaque file handle.
//!
//! ## Protocol
//!
//! 1. Query with a zero-capacity handle. This must fail with `EOVERFLOW` and
//!    report the required size. Success, or any other error, is a failure.
//! 2. Grow the handle to exactly the reported size, keeping its header.
//! 3. Query again. This must succeed.
//!
//! An unexpected success on the first call is a failure too, even on
//! filesystems where a zero-length handle would be valid.

use std::path::Path;

use probe_sys::handle::{AT_FDCWD, FileHandle, Lookup, name_to_handle_at};
use rustix::io::Errno;
use tracing::debug;

use crate::{ProbeError, Result};

const STEP: &str = "name_to_handle_at";

/// A handle produced by a completed protocol run.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub handle: FileHandle,
    pub mount_id: i32,
    /// Size reported by the first, zero-capacity query.
    pub reported_size: u32,
}

pub fn run(path: &Path) -> Result<Resolution> {
    debug!(path = %path.display(), "resolving file handle");
    resolve(|handle| {
        name_to_handle_at(AT_FDCWD, path, handle, 0).map_err(|e| ProbeError::syscall(STEP, e))
    })
}

/// Drive the two-call protocol over `lookup`.
///
/// `lookup` is called exactly twice on success: once with an empty handle
/// and once with the handle grown to the size the first call reported.
pub fn resolve<F>(mut lookup: F) -> Result<Resolution>
where
    F: FnMut(&mut FileHandle) -> Result<Lookup>,
{
    let mut handle = FileHandle::empty();

    let reported_size = match lookup(&mut handle)? {
        Lookup::NeedsCapacity(size) => size,
        Lookup::Complete { .. } => return Err(ProbeError::UnexpectedSuccess { step: STEP }),
    };
    debug!(reported_size, "handle size discovered");

    handle
        .resize(reported_size)
        .map_err(|source| ProbeError::Alloc {
            step: "realloc",
            source,
        })?;

    let mount_id = match lookup(&mut handle)? {
        Lookup::Complete { mount_id } => mount_id,
        Lookup::NeedsCapacity(_) => return Err(ProbeError::syscall(STEP, Errno::OVERFLOW)),
    };
    debug!(
        handle_type = handle.handle_type(),
        handle_bytes = handle.handle_bytes(),
        mount_id,
        "handle resolved"
    );

    Ok(Resolution {
        handle,
        mount_id,
        reported_size,
    })
}
