//! Loads the source file into an owned byte buffer.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::error::DigestError;

/// The source file's bytes, in file order. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
}

impl SourceBuffer {
    /// Wraps bytes that are already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Returns the loaded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of loaded bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the source was empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reads the whole file at `path`.
///
/// The file is measured by seeking to its end, rewound, and copied into a
/// buffer reserved at exactly the measured size. The handle is closed when
/// this function returns.
///
/// # Errors
///
/// - [`DigestError::Open`] if the file cannot be opened or measured.
/// - [`DigestError::Alloc`] if the buffer cannot be reserved.
/// - [`DigestError::Read`] if reading fails part way.
pub fn load(path: &Path) -> Result<SourceBuffer, DigestError> {
    let open_err = |source| DigestError::Open {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(open_err)?;
    let size = file.seek(SeekFrom::End(0)).map_err(open_err)?;
    file.rewind().map_err(open_err)?;
    debug!(path = %path.display(), size, "measured source file");

    let mut bytes = Vec::new();
    // A size that does not fit in usize fails the reservation as a capacity overflow.
    let capacity = usize::try_from(size).unwrap_or(usize::MAX);
    bytes
        .try_reserve_exact(capacity)
        .map_err(|source| DigestError::Alloc { size, source })?;

    BufReader::new(file)
        .take(size)
        .read_to_end(&mut bytes)
        .map_err(|source| DigestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(SourceBuffer { bytes })
}
