//! `b64` — base64 encode (default) or decode stdin to stdout.
//!
//! Usage:
//!   b64 [--decode | -d]

use base64_buf::cli::{parse_args, run_io, CliError};
use std::io;

fn try_main() -> Result<(), CliError> {
    let mode = parse_args(std::env::args().skip(1))?;
    run_io(mode, io::stdin().lock(), io::stdout().lock())
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );

    if let Err(e) = try_main() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
