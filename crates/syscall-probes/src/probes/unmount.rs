//! unmount-probe: detach the filesystem mounted at a path.
//!
//! Plain `umount2(target, 0)`: not forced, not lazy.

use std::path::Path;

use probe_sys::mount::unmount;
use rustix::mount::UnmountFlags;
use tracing::debug;

use crate::{ProbeError, Result};

pub fn run(target: &Path) -> Result<()> {
    debug!(path = %target.display(), "unmounting");
    unmount(target, UnmountFlags::empty()).map_err(|e| ProbeError::syscall("umount", e))
}
