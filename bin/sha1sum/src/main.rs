#![deny(unsafe_code)]

use std::{env, io, process::ExitCode};

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics stay silent unless RUST_LOG opts in.
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    sha1_cli::run(env::args_os(), &mut stdout, &mut stderr)
}
