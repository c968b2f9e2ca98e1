//! Error taxonomy for the load, compute and print phases.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a digest run can fail. All of them are fatal to the process.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The source file could not be opened or measured.
    #[error("Failed to open source file: {}", path.display())]
    Open {
        /// Path that was opened, as given (relative paths stay relative).
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The source file was opened but its bytes could not be read.
    #[error("Failed to read source file: {}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The source buffer could not be allocated.
    #[error("Failed to allocate {size} bytes for source buffer")]
    Alloc {
        /// Requested buffer size in bytes.
        size: u64,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },

    /// A digest position fell outside the constant table.
    #[error("Digest index out of range: {0}")]
    IndexOutOfRange(usize),

    /// The digest line could not be written to the output stream.
    #[error("Failed to write digest")]
    Write(#[source] std::io::Error),
}
