//! Path resolution for collections and resources
//!
//! Layout on disk is `<root>/<collection>/<resource>.json`. Lookups accept
//! either the bare `<root>/<collection>/<resource>` path or its `.json` form,
//! checked in that order.

use crate::error::{NameKind, Result, StoreError};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extension of every resource file
pub const RESOURCE_EXTENSION: &str = "json";

/// Suffix appended to a resource file while it is being written
pub const TEMP_SUFFIX: &str = ".tmp";

/// What a lookup found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolved {
    /// A directory, at the given path
    Directory(PathBuf),
    /// A regular file (or anything that is not a directory), at the given path
    File(PathBuf),
}

/// Computes every path the driver touches from a fixed root
#[derive(Debug, Clone)]
pub struct StorePaths {
    root: PathBuf,
}

impl StorePaths {
    /// Create paths rooted at `root`, normalizing redundant separators
    pub fn new(root: impl AsRef<Path>) -> Self {
        let cleaned: PathBuf = root.as_ref().components().collect();
        let root = if cleaned.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            cleaned
        };
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<collection>`
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    /// `<root>/<collection>/<resource>`, or the collection directory when
    /// `resource` is empty
    pub fn target(&self, collection: &str, resource: &str) -> PathBuf {
        let dir = self.collection_dir(collection);
        if resource.is_empty() {
            dir
        } else {
            dir.join(resource)
        }
    }

    /// `<root>/<collection>/<resource>.json`
    pub fn resource_file(&self, collection: &str, resource: &str) -> PathBuf {
        with_suffix(
            &self.collection_dir(collection).join(resource),
            &format!(".{}", RESOURCE_EXTENSION),
        )
    }

    /// `<root>/<collection>/<resource>.json.tmp`
    pub fn temp_file(&self, collection: &str, resource: &str) -> PathBuf {
        with_suffix(&self.resource_file(collection, resource), TEMP_SUFFIX)
    }
}

/// Append `suffix` to the final component of `path` without replacing any
/// existing extension (`john.doe` becomes `john.doe.json`)
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(suffix);
    PathBuf::from(os)
}

/// Stat `bare`, falling back to `bare.json` when the bare path does not exist.
///
/// Returns `Ok(None)` when neither form exists, including when a parent
/// component is a regular file. Other errors (permissions, broken mounts) are
/// returned as-is.
pub(crate) fn resolve(bare: &Path) -> io::Result<Option<Resolved>> {
    match stat(bare)? {
        Some(found) => Ok(Some(found)),
        None => stat(&with_suffix(bare, &format!(".{}", RESOURCE_EXTENSION))),
    }
}

fn stat(path: &Path) -> io::Result<Option<Resolved>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(Some(Resolved::Directory(path.to_path_buf()))),
        Ok(_) => Ok(Some(Resolved::File(path.to_path_buf()))),
        Err(e) if is_missing(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

fn is_missing(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}

/// Reject names that are empty or would escape their parent directory
pub fn validate_name(kind: NameKind, name: &str) -> Result<()> {
    if name.is_empty() {
        let message = match kind {
            NameKind::Collection => "missing collection - no place to store the record",
            NameKind::Resource => "missing resource - unable to identify the record",
        };
        return Err(StoreError::validation(kind, message));
    }

    if name == "." || name == ".." {
        return Err(StoreError::validation(
            kind,
            format!("'{}' is a relative path component", name),
        ));
    }

    if let Some(c) = name.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(StoreError::validation(
            kind,
            format!("'{}' contains forbidden character {:?}", name, c),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_paths() {
        let paths = StorePaths::new("/var/db/");
        assert_eq!(paths.root(), Path::new("/var/db"));
        assert_eq!(paths.collection_dir("users"), Path::new("/var/db/users"));
        assert_eq!(paths.target("users", "john"), Path::new("/var/db/users/john"));
        assert_eq!(paths.target("users", ""), Path::new("/var/db/users"));
        assert_eq!(
            paths.resource_file("users", "john"),
            Path::new("/var/db/users/john.json")
        );
        assert_eq!(
            paths.temp_file("users", "john"),
            Path::new("/var/db/users/john.json.tmp")
        );
    }

    #[test]
    fn test_dotted_resource_keeps_its_name() {
        let paths = StorePaths::new("db");
        assert_eq!(
            paths.resource_file("users", "john.doe"),
            Path::new("db/users/john.doe.json")
        );
    }

    #[test]
    fn test_empty_root_is_current_dir() {
        assert_eq!(StorePaths::new("").root(), Path::new("."));
    }

    #[test]
    fn test_resolve_prefers_bare_path() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("users");
        fs::create_dir(&dir).unwrap();

        assert_eq!(resolve(&dir).unwrap(), Some(Resolved::Directory(dir.clone())));
    }

    #[test]
    fn test_resolve_falls_back_to_json() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("john.json");
        fs::write(&file, "{}\n").unwrap();

        let bare = temp.path().join("john");
        assert_eq!(resolve(&bare).unwrap(), Some(Resolved::File(file)));
    }

    #[test]
    fn test_resolve_missing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve(&temp.path().join("ghost")).unwrap(), None);
    }

    #[test]
    fn test_resolve_under_regular_file_is_missing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("users");
        fs::write(&file, "not a directory").unwrap();

        assert_eq!(resolve(&file.join("john")).unwrap(), None);
    }

    #[rstest]
    #[case("users")]
    #[case("john.doe")]
    #[case("with space")]
    #[case("..hidden")]
    #[case("ünïcødé")]
    fn test_valid_names(#[case] name: &str) {
        assert!(validate_name(NameKind::Resource, name).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("..")]
    #[case("a/b")]
    #[case("a\\b")]
    #[case("nul\0byte")]
    fn test_invalid_names(#[case] name: &str) {
        let err = validate_name(NameKind::Collection, name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
