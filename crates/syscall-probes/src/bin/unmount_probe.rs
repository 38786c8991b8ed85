//! unmount-probe - detach the filesystem mounted at a path

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use syscall_probes::probes::unmount;
use syscall_probes::{cli, report};

#[derive(Parser)]
#[command(name = "unmount-probe")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Unmount a target with umount2(target, 0)")]
struct Cli {
    /// Mount point to detach
    #[arg(allow_hyphen_values = true)]
    target: PathBuf,
}

fn main() -> ExitCode {
    cli::init_logging();
    let args = match cli::parse::<Cli>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    cli::log_privileges();

    report::exit_code(unmount::run(&args.target))
}
