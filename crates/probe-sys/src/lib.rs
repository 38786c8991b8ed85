//! Low-level Linux syscall wrappers for the syscall probes.
//!
//! Each wrapper performs exactly one syscall and hands back the raw outcome
//! as a `Result<_, Errno>`. Interpreting the outcome (which errno is the
//! "expected" one) is left to the caller.
//!
//! For standard syscalls, use rustix. Only the procfs `mount` and
//! `name_to_handle_at` go through libc directly.
//!
//! ## Modules
//!
//! - **mount** - `mkdir`, `mount` of a proc filesystem, `umount2`
//! - **handle** - `name_to_handle_at` and the file handle buffer
//! - **reboot** - `reboot(RB_AUTOBOOT)`
//! - **check** - Runtime privilege detection (effective capabilities)
//!
//! # Safety
//!
//! The libc wrappers are `unsafe` internally. Buffers passed to the kernel are
//! owned by safe types that keep their declared capacity in sync with their
//! allocation.

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use rustix::io::Errno;

pub mod check;
pub mod handle;
pub mod mount;
pub mod reboot;

pub use check::{Capability, CheckError, Privileges, privileges};
pub use handle::{FileHandle, Lookup};

#[inline]
pub fn last_errno() -> Errno {
    // SAFETY: __errno_location always returns valid thread-local pointer.
    Errno::from_raw_os_error(unsafe { *libc::__errno_location() })
}

/// Plain `strerror`-style description of an errno, e.g. `Operation not permitted`.
pub fn describe(errno: Errno) -> &'static str {
    nix::errno::Errno::from_raw(errno.raw_os_error()).desc()
}

#[inline]
pub(crate) fn path_to_cstring(path: &Path) -> Result<CString, Errno> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| Errno::INVAL)
}
