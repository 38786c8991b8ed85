//! The four probes.
//!
//! - **mount** - `mkdir` + proc `mount`, `EPERM` is the failure condition
//! - **handle** - two-phase `name_to_handle_at` size discovery
//! - **reboot** - `reboot(RB_AUTOBOOT)`
//! - **unmount** - plain `umount2`

pub mod handle;
pub mod mount;
pub mod reboot;
pub mod unmount;
