//! reboot-probe: is an immediate restart blocked?
//!
//! Issues `reboot(RB_AUTOBOOT)`. When the request goes through the process
//! does not survive to report anything, so the only observable outcome is
//! the error path.

use probe_sys::reboot::reboot_autoboot;
use tracing::debug;

use crate::{ProbeError, Result};

pub fn run() -> Result<()> {
    debug!("requesting RB_AUTOBOOT");
    reboot_autoboot().map_err(|e| ProbeError::syscall("reboot", e))
}
