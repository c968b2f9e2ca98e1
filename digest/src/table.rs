//! Embedded constant table added to each digest position.
//!
//! The values are opaque: they carry no meaning beyond being the per-position
//! offset that turns raw chunk sums into the printed digest.
//!
//! # Example
//!
//! ```
//! use selfdigest::table::{obfuscation, FACT_COUNT};
//!
//! assert_eq!(obfuscation(0).ok(), Some(0xEE));
//! assert_eq!(obfuscation(6).ok(), Some(0x00));
//! assert!(obfuscation(FACT_COUNT).is_err());
//! ```

use crate::error::DigestError;

/// Number of digest positions (and of chunks the source is split into).
pub const FACT_COUNT: usize = 22;

/// Per-position offsets, indexed by digest position.
///
/// Position 6 is zero, so that position prints its raw chunk sum.
pub static OBFUSCATION: [u8; FACT_COUNT] = [
    0xEE, 0x5F, 0xC1, 0x4F, 0x35, 0xCF, 0x00, 0x97, 0xBC, 0x1A, 0xE4, //
    0x73, 0xDA, 0x05, 0x2A, 0x49, 0x73, 0x90, 0x1D, 0x3E, 0xA5, 0x22,
];

/// Returns the offset for digest position `ix`.
///
/// # Errors
///
/// Returns [`DigestError::IndexOutOfRange`] if `ix >= FACT_COUNT`.
#[inline]
pub fn obfuscation(ix: usize) -> Result<u8, DigestError> {
    OBFUSCATION
        .get(ix)
        .copied()
        .ok_or(DigestError::IndexOutOfRange(ix))
}
