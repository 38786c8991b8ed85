//! handle-probe - resolve a path to a file handle via name_to_handle_at

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use syscall_probes::probes::handle;
use syscall_probes::{cli, report};

#[derive(Parser)]
#[command(name = "handle-probe")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Resolve a path to an opaque file handle in two calls")]
struct Cli {
    /// Path to resolve, relative to the current directory
    #[arg(allow_hyphen_values = true)]
    pathname: PathBuf,
}

fn main() -> ExitCode {
    cli::init_logging();
    let args = match cli::parse::<Cli>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    cli::log_privileges();

    report::exit_code(handle::run(&args.pathname))
}
