//! Privilege checking.
//!
//! Reports the effective uid and the effective capabilities that decide the
//! outcome of each probe. The snapshot is read once from `/proc/self/status`
//! and cached in a static `OnceLock`.
//!
//! ## Relevant Capabilities
//!
//! | Capability | Bit | Needed by |
//! |------------|-----|-----------|
//! | `CAP_DAC_READ_SEARCH` | 2 | `open_by_handle_at` (not `name_to_handle_at`) |
//! | `CAP_SYS_ADMIN` | 21 | `mount`, `umount2` |
//! | `CAP_SYS_BOOT` | 22 | `reboot` |
//!
//! ## Usage
//!
//! ```ignore
//! match check::privileges() {
//!     Ok(p) if p.has(Capability::SysBoot) => eprintln!("reboot would succeed"),
//!     Ok(_) => eprintln!("reboot will fail with EPERM"),
//!     Err(e) => eprintln!("privilege check failed: {e}"),
//! }
//! ```

use std::sync::OnceLock;

use thiserror::Error;

const STATUS_PATH: &str = "/proc/self/status";

/// Capabilities the probes care about, by bit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    DacReadSearch = 2,
    SysAdmin = 21,
    SysBoot = 22,
}

impl Capability {
    #[inline]
    pub fn mask(self) -> u64 {
        1 << self as u32
    }
}

/// Privilege snapshot of the current process.
#[derive(Debug, Clone)]
pub struct Privileges {
    pub euid: u32,
    pub effective_caps: u64,
}

impl Privileges {
    pub fn has(&self, cap: Capability) -> bool {
        self.effective_caps & cap.mask() != 0
    }
}

/// Errors that can occur while reading the privilege snapshot.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    #[error("failed to read /proc/self/status: {0}")]
    StatusUnreadable(String),

    #[error("no CapEff line in /proc/self/status")]
    CapEffMissing,

    #[error("malformed CapEff value: {0:?}")]
    CapEffMalformed(String),
}

static PRIVILEGES: OnceLock<Result<Privileges, CheckError>> = OnceLock::new();

/// Read the privilege snapshot and cache the result.
pub fn privileges() -> Result<&'static Privileges, &'static CheckError> {
    PRIVILEGES.get_or_init(privileges_impl).as_ref()
}

fn privileges_impl() -> Result<Privileges, CheckError> {
    let status = std::fs::read_to_string(STATUS_PATH)
        .map_err(|e| CheckError::StatusUnreadable(e.to_string()))?;

    Ok(Privileges {
        euid: rustix::process::geteuid().as_raw(),
        effective_caps: parse_cap_eff(&status)?,
    })
}

fn parse_cap_eff(status: &str) -> Result<u64, CheckError> {
    let value = status
        .lines()
        .find_map(|line| line.strip_prefix("CapEff:"))
        .ok_or(CheckError::CapEffMissing)?
        .trim();

    u64::from_str_radix(value, 16).map_err(|_| CheckError::CapEffMalformed(value.to_string()))
}
