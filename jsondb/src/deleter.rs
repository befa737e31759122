//! Removal of resources and collections

use crate::error::{Result, StoreError};
use crate::paths::Resolved;
use std::fs;
use std::io;
use std::path::Path;

/// Remove what [`resolve`](crate::paths::resolve) found.
///
/// Directories are removed recursively. For a regular file the `.json`
/// resource file is removed, whichever form the lookup matched.
pub(crate) fn remove_resolved(
    resolved: &Resolved,
    resource_file: &Path,
    collection: &str,
    resource: &str,
) -> Result<()> {
    match resolved {
        Resolved::Directory(dir) => fs::remove_dir_all(dir).map_err(|e| StoreError::io(dir, e)),
        Resolved::File(_) => fs::remove_file(resource_file).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::not_found(collection, resource),
            _ => StoreError::io(resource_file, e),
        }),
    }
}
