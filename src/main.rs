//! png2src - Command-line tool for packing indexed PNG sprites into source code

use std::process::ExitCode;

use png2src::cli;

fn main() -> ExitCode {
    cli::run()
}
