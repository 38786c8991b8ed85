//! Shared command-line plumbing for the probe binaries.
//!
//! Path arguments are taken literally: the probes that accept one declare it
//! with `allow_hyphen_values` and disable clap's `--help`/`--version`, so a
//! path such as `-x` or `--help` reaches the syscall like any other.

use std::process::ExitCode;

use clap::Parser;
use probe_sys::{Capability, CheckError, Privileges};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// Filtered by `RUST_LOG`, defaulting to `warn` so a normal run prints only
/// the probe's own diagnostic.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

/// Parse the process arguments.
///
/// On a usage error clap's message is printed to stderr and the caller gets
/// `ExitCode::FAILURE` back. No syscall should follow.
pub fn parse<C: Parser>() -> Result<C, ExitCode> {
    C::try_parse().map_err(|e| {
        let _ = e.print();
        ExitCode::FAILURE
    })
}

/// Log the privilege snapshot that decides the probe's outcome.
///
/// `/proc/self/status` is only read when debug logging is enabled.
pub fn log_privileges() {
    log_privileges_with(probe_sys::privileges);
}

fn log_privileges_with<F>(load: F)
where
    F: FnOnce() -> Result<&'static Privileges, &'static CheckError>,
{
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    match load() {
        Ok(p) => tracing::debug!(
            euid = p.euid,
            cap_sys_admin = p.has(Capability::SysAdmin),
            cap_sys_boot = p.has(Capability::SysBoot),
            cap_dac_read_search = p.has(Capability::DacReadSearch),
            "privileges"
        ),
        Err(e) => tracing::debug!(error = %e, "privilege check failed"),
    }
}
