//! reboot-probe - request an immediate restart
//!
//! Takes no arguments; anything on the command line is ignored.

use std::process::ExitCode;

use syscall_probes::probes::reboot;
use syscall_probes::{cli, report};

fn main() -> ExitCode {
    cli::init_logging();
    cli::log_privileges();

    report::exit_code(reboot::run())
}
