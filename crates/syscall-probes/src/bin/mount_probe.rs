//! mount-probe - create /proc2 and try to mount procfs on it
//!
//! Takes no arguments; anything on the command line is ignored.

use std::path::Path;
use std::process::ExitCode;

use syscall_probes::probes::mount::{self, DEFAULT_TARGET};
use syscall_probes::{cli, report};

fn main() -> ExitCode {
    cli::init_logging();
    cli::log_privileges();

    report::exit_code(mount::run(Path::new(DEFAULT_TARGET)))
}
