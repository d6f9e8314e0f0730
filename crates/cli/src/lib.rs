#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Demonstration driver for the SHA-1 digest library.
//!
//! Exposes a testable [`run`] entry point that binaries wrap with locked
//! standard streams. With no operands the driver prints the digest of the
//! fixed message `"abc"`; otherwise each operand is hashed as its own
//! message. Every message produces one output line of the form
//!
//! ```text
//! SHA-1: A9993E36 4706816A BA3E2571 7850C26C 9CD0D89D
//! ```
//!
//! with the five digest words rendered as uppercase hex, zero-padded to
//! eight digits and space-separated.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use sha1_digest::{Sha1Digest, Sha1Error};
use thiserror::Error;
use tracing::debug;

/// Message hashed when the caller supplies no operands.
const DEMO_MESSAGE: &[u8] = b"abc";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Digest(#[from] Sha1Error),
    #[error("failed to write digest output: {0}")]
    Io(#[from] io::Error),
}

/// Runs the driver over `args`, writing one digest line per message.
///
/// The first element of `args` is the program name and is ignored. The exit
/// code is successful only if every message hashed and printed cleanly; on
/// the first failure a diagnostic goes to `stderr` and the remaining
/// operands are skipped.
pub fn run<Args, Out, Err>(args: Args, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Args: IntoIterator<Item = OsString>,
    Out: Write,
    Err: Write,
{
    match run_inner(args, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "sha1sum: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run_inner<Args, Out>(args: Args, stdout: &mut Out) -> Result<(), CliError>
where
    Args: IntoIterator<Item = OsString>,
    Out: Write,
{
    let mut operands = args.into_iter().skip(1).peekable();

    if operands.peek().is_none() {
        return print_digest(stdout, DEMO_MESSAGE);
    }

    for operand in operands {
        print_digest(stdout, operand.as_encoded_bytes())?;
    }

    Ok(())
}

fn print_digest<Out: Write>(stdout: &mut Out, message: &[u8]) -> Result<(), CliError> {
    debug!(len = message.len(), "hashing message");
    let digest = sha1_digest::digest(message)?;
    writeln!(stdout, "SHA-1: {}", format_words(&digest))?;
    Ok(())
}

/// Formats the digest words as uppercase hex, zero-padded, space-separated.
fn format_words(digest: &Sha1Digest) -> String {
    let [a, b, c, d, e] = digest.words();
    format!("{a:08X} {b:08X} {c:08X} {d:08X} {e:08X}")
}
