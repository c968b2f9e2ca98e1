//! `selfdigest` — Prints the digest of its own source file.
//!
//! Reads the source file this binary was compiled from, at the path recorded
//! at compile time, resolved against the current working directory (the
//! workspace root). The digest is written to stdout as a single line,
//! truncated at the first zero byte.
//!
//! **Usage:**
//! ```
//! selfdigest [ARGS...]
//! ```
//!
//! Arguments are accepted and ignored. Exits 1 if the source cannot be read.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use selfdigest::{run, DigestPaths};
use tracing::error;

/// This file, relative to the workspace root.
const SOURCE_PATH: &str = file!();

/// Print the digest of this program's own source file.
#[derive(Parser)]
#[command(
    name = "selfdigest",
    about = "Print the digest of this program's own source file",
    disable_help_flag = true,
    disable_version_flag = true,
    ignore_errors = true
)]
struct Args {
    /// Accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the digest line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let _ignored = Args::parse().ignored;

    let paths = DigestPaths {
        source: PathBuf::from(SOURCE_PATH),
    };
    let mut stdout = std::io::stdout().lock();
    run(&paths, &mut stdout)
        .inspect_err(|err| error!(%err, "digest failed"))
        .with_context(|| format!("Failed to digest {}", SOURCE_PATH))?;

    Ok(())
}
