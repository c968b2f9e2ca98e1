//! Chunked 8-bit checksum over the source buffer.
//!
//! The source is cut into [`FACT_COUNT`] chunks of `len / FACT_COUNT` bytes
//! each. Every chunk is summed modulo 256 and offset by its entry in the
//! constant table:
//!
//! ```text
//! digest[i] = (sum(bytes[i*unit .. i*unit + unit]) + OBFUSCATION[i]) mod 256
//! ```
//!
//! Bytes past `FACT_COUNT * unit` never contribute. Sources shorter than
//! `FACT_COUNT` bytes have a zero unit, so the digest is the table itself.

use tracing::debug;

use crate::error::DigestError;
use crate::table::{obfuscation, FACT_COUNT};

/// Chunk length for a source of `len` bytes (truncating division).
#[inline]
pub const fn unit_size(len: usize) -> usize {
    len / FACT_COUNT
}

/// The fact buffer: [`FACT_COUNT`] digest bytes plus a NUL terminator.
///
/// The terminator slot is zeroed at construction and never written, so the
/// buffer always reads as a terminated byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    bytes: [u8; FACT_COUNT + 1],
}

impl Fact {
    fn zeroed() -> Self {
        Self {
            bytes: [0; FACT_COUNT + 1],
        }
    }

    /// All computed digest bytes, zeros included.
    pub fn digest(&self) -> [u8; FACT_COUNT] {
        let mut out = [0u8; FACT_COUNT];
        out.copy_from_slice(&self.bytes[..FACT_COUNT]);
        out
    }

    /// The digest read as a NUL-terminated string: every byte before the
    /// first zero.
    pub fn as_c_bytes(&self) -> &[u8] {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(FACT_COUNT);
        &self.bytes[..end]
    }
}

/// Computes the digest of `bytes`.
///
/// # Errors
///
/// Returns [`DigestError::IndexOutOfRange`] if a position has no table entry.
/// The loop bound equals the table size, so this does not occur in practice.
pub fn compute(bytes: &[u8]) -> Result<Fact, DigestError> {
    let unit = unit_size(bytes.len());
    debug!(len = bytes.len(), unit, "computing digest");

    let mut fact = Fact::zeroed();
    for ix in 0..FACT_COUNT {
        let start = ix * unit;
        let sum = bytes[start..start + unit]
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_add(b));
        fact.bytes[ix] = sum.wrapping_add(obfuscation(ix)?);
    }
    Ok(fact)
}
