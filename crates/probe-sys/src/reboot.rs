//! System restart.

use rustix::io::Errno;
use rustix::system::RebootCommand;

/// Request an immediate restart (`RB_AUTOBOOT`, `LINUX_REBOOT_CMD_RESTART`).
///
/// No `sync` is performed and no shutdown sequence runs. On success the call
/// does not return; it only comes back when the kernel refuses the request
/// (`EPERM` without `CAP_SYS_BOOT`).
#[inline]
pub fn reboot_autoboot() -> Result<(), Errno> {
    rustix::system::reboot(RebootCommand::Restart)
}
