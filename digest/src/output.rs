//! Writes the digest line.

use std::io::Write;

use crate::compute::Fact;
use crate::error::DigestError;

/// Writes `fact` as a NUL-terminated string followed by a newline, then flushes.
///
/// Bytes are written raw. A zero digest byte ends the line early, so the
/// line carries anywhere from zero to [`FACT_COUNT`](crate::table::FACT_COUNT)
/// digest bytes.
///
/// # Errors
///
/// Returns [`DigestError::Write`] if the writer fails.
pub fn write_fact<W: Write>(out: &mut W, fact: &Fact) -> Result<(), DigestError> {
    out.write_all(fact.as_c_bytes()).map_err(DigestError::Write)?;
    out.write_all(b"\n").map_err(DigestError::Write)?;
    out.flush().map_err(DigestError::Write)
}
