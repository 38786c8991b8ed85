//! Directory creation, proc mounting and unmounting.

use std::path::Path;

use rustix::fs::Mode;
use rustix::io::Errno;
use rustix::mount::UnmountFlags;

use crate::{last_errno, path_to_cstring};

/// Create a directory with the given mode (subject to the process umask).
#[inline]
pub fn mkdir(path: &Path, mode: u32) -> Result<(), Errno> {
    rustix::fs::mkdir(path, Mode::from_raw_mode(mode))
}

/// Mount a fresh proc filesystem at `target` with no flags and no data.
pub fn mount_proc(target: &Path) -> Result<(), Errno> {
    let target_c = path_to_cstring(target)?;

    let ret = unsafe {
        libc::mount(
            c"proc".as_ptr(),
            target_c.as_ptr(),
            c"proc".as_ptr(),
            0,
            std::ptr::null(),
        )
    };
    if ret != 0 { Err(last_errno()) } else { Ok(()) }
}

/// Detach the filesystem mounted at `target` with `umount2`.
///
/// Empty `flags` is a plain unmount (neither `MNT_FORCE` nor `MNT_DETACH`).
#[inline]
pub fn unmount(target: &Path, flags: UnmountFlags) -> Result<(), Errno> {
    rustix::mount::unmount(target, flags)
}
