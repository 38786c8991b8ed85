//! mount-probe: is mounting a fresh procfs blocked?
//!
//! Creates the target directory with mode 0555, then mounts a `proc`
//! filesystem on it. Only `EPERM` from the mount counts as a failure; the
//! point is to tell "blocked by privilege restriction" apart from
//! "attempted". The directory is left behind either way.

use std::path::Path;

use probe_sys::mount::{mkdir, mount_proc};
use rustix::io::Errno;
use tracing::debug;

use crate::{ProbeError, Result};

/// Mount point used by the `mount-probe` binary.
pub const DEFAULT_TARGET: &str = "/proc2";

/// Mode for the mount point: read/execute for everyone, no write.
pub const TARGET_MODE: u32 = 0o555;

/// How an attempted mount ended, when it did not count as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// The mount failed with something other than `EPERM`.
    Refused(Errno),
}

pub fn run(target: &Path) -> Result<MountOutcome> {
    debug!(path = %target.display(), "creating mount point");
    mkdir(target, TARGET_MODE).map_err(|e| ProbeError::syscall("mkdir", e))?;

    match mount_proc(target) {
        Ok(()) => {
            debug!(path = %target.display(), "proc mounted");
            Ok(MountOutcome::Mounted)
        }
        Err(Errno::PERM) => Err(ProbeError::syscall("mount", Errno::PERM)),
        Err(errno) => {
            debug!(path = %target.display(), %errno, "mount refused without EPERM");
            Ok(MountOutcome::Refused(errno))
        }
    }
}
