//! CLI binary for `voicetask`.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the
//! library.

use std::process::ExitCode;

use clap::Parser;
use voicetask::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = voicetask::cli::run(cli.command);

    for line in output.stdout {
        println!("{line}");
    }
    for line in output.stderr {
        eprintln!("{line}");
    }

    output.exit_code
}
