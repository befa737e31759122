//! Serialization and atomic persistence of resources

use crate::error::{Result, StoreError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Encode `value` as tab-indented JSON followed by a single newline
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `bytes` to `temp`, sync it, then rename it over `target`.
///
/// Both paths must live in the same directory so the rename stays on one
/// filesystem. If the rename fails `temp` is left in place; the next write of
/// the same resource truncates and reuses it.
pub(crate) fn atomic_write(temp: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = fs::File::create(temp).map_err(|e| StoreError::io(temp, e))?;
    file.write_all(bytes).map_err(|e| StoreError::io(temp, e))?;
    file.sync_all().map_err(|e| StoreError::io(temp, e))?;
    drop(file);

    fs::rename(temp, target).map_err(|e| StoreError::io(target, e))
}
