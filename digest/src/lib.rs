//! Self-digest: a fixed-length checksum of a source file, printed as a string.
//!
//! The source file is split into [`FACT_COUNT`](table::FACT_COUNT) equal
//! chunks. Each chunk is summed with wrapping 8-bit arithmetic and offset by
//! an embedded constant, and the resulting bytes are printed as a
//! NUL-terminated string. The `selfdigest` binary points this at its own
//! source file.
//!
//! # Pipeline
//!
//! | Phase | Module | Failure |
//! |-------|--------|---------|
//! | Load | [`loader`] | [`DigestError::Open`], [`DigestError::Alloc`], [`DigestError::Read`] |
//! | Compute | [`compute`](mod@compute) | [`DigestError::IndexOutOfRange`] |
//! | Print | [`output`] | [`DigestError::Write`] |
//!
//! # Entry Point
//!
//! ```no_run
//! use selfdigest::{run, DigestPaths};
//! use std::path::PathBuf;
//!
//! let paths = DigestPaths {
//!     source: PathBuf::from("clients/src/bin/selfdigest.rs"),
//! };
//! let mut stdout = std::io::stdout().lock();
//! run(&paths, &mut stdout).expect("Failed to digest source");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod compute;
pub mod error;
pub mod loader;
pub mod output;
pub mod table;

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

pub use compute::{compute, Fact};
pub use error::DigestError;
pub use loader::{load, SourceBuffer};
pub use output::write_fact;

/// Paths required by the digest runner.
pub struct DigestPaths {
    /// File whose bytes are digested. Relative paths resolve against the
    /// current working directory.
    pub source: PathBuf,
}

/// Loads the source, computes its digest and writes the digest line to `out`.
///
/// Phases run strictly in order; nothing is written unless load and compute
/// both succeed.
///
/// # Errors
///
/// Returns the first [`DigestError`] raised by any phase.
pub fn run<W: Write>(paths: &DigestPaths, out: &mut W) -> Result<Fact, DigestError> {
    let source = load(&paths.source)?;
    let fact = compute(source.as_bytes())?;
    debug!(printed = fact.as_c_bytes().len(), "digest ready");
    write_fact(out, &fact)?;
    Ok(fact)
}
