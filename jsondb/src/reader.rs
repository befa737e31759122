//! Loading single resources and whole collections

use crate::error::{Result, StoreError};
use crate::paths::{RESOURCE_EXTENSION, TEMP_SUFFIX};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read the raw text of one resource file.
///
/// A missing file maps to `NotFound` so callers that resolved the bare path
/// (e.g. a directory of the same name) still get a not-found result.
pub(crate) fn read_resource(path: &Path, collection: &str, resource: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::not_found(collection, resource),
        _ => StoreError::io(path, e),
    })
}

/// Resource files in `dir`, sorted by file name.
///
/// Sub-directories and temp files left by interrupted writes are skipped.
pub(crate) fn resource_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| StoreError::io(&path, e))?;

        if file_type.is_dir() {
            continue;
        }

        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(TEMP_SUFFIX))
        {
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Raw text of every resource file in `dir`, in [`resource_files`] order
pub(crate) fn read_collection(dir: &Path) -> Result<Vec<String>> {
    resource_files(dir)?
        .iter()
        .map(|path| fs::read_to_string(path).map_err(|e| StoreError::io(path, e)))
        .collect()
}

/// Resource names (file stems of `*.json` files) in `dir`
pub(crate) fn resource_names(dir: &Path) -> Result<Vec<String>> {
    Ok(resource_files(dir)?
        .iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == RESOURCE_EXTENSION))
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect())
}
