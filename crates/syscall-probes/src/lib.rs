//! syscall-probes: single-syscall sandbox probes
//!
//! Each probe performs one Linux syscall, inspects the outcome, prints at
//! most one diagnostic line and exits `0` or `1`. They are meant to run inside
//! a container or sandbox under test, to check whether a privileged operation
//! is blocked.
//!
//! | Binary | Syscall | Fails when |
//! |--------|---------|------------|
//! | `mount-probe` | `mkdir` + `mount("proc", "/proc2", "proc")` | mkdir fails, or mount fails with `EPERM` |
//! | `handle-probe <PATH>` | `name_to_handle_at` (twice) | the size-discovery protocol deviates |
//! | `reboot-probe` | `reboot(RB_AUTOBOOT)` | the request errors |
//! | `unmount-probe <TARGET>` | `umount2(target, 0)` | the unmount errors |
//!
//! The probe logic lives in [`probes`] so it can be driven from tests against
//! scratch paths; the binaries under `src/bin` only parse arguments and report.

pub mod cli;
pub mod error;
pub mod probes;
pub mod report;

pub use error::{ProbeError, Result};
