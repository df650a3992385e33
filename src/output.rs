use std::path::Path;

use serde::Serialize;

use crate::errors::GenerationError;

/// Serialize the whole batch in memory, then write it in one call so a
/// failed run never leaves a partial file. Overwrites any existing file.
/// Returns the number of bytes written.
pub fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> Result<u64, GenerationError> {
    let buf = serde_json::to_vec_pretty(records)?;
    std::fs::write(path, &buf)?;
    Ok(buf.len() as u64)
}
