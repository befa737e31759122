//! The store facade
//!
//! A [`Driver`] owns a root directory and hands out per-collection locks to
//! serialize writes and deletes. Reads take no lock and rely on writes being
//! published by an atomic rename.

use crate::deleter;
use crate::error::{NameKind, Result, StoreError};
use crate::locks::{lock_exclusive, LockRegistry};
use crate::logger::Logger;
use crate::options::Options;
use crate::paths::{self, validate_name, StorePaths};
use crate::reader;
use crate::writer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// On-disk JSON document store rooted at a single directory
pub struct Driver {
    paths: StorePaths,
    locks: LockRegistry,
    log: Arc<dyn Logger>,
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("root", &self.paths.root())
            .field("collections", &self.locks.len())
            .finish()
    }
}

impl Driver {
    /// Open the store at `root`, creating the directory (and parents) if absent
    pub fn open(root: impl AsRef<Path>, options: Options) -> Result<Self> {
        let paths = StorePaths::new(root);
        let log = options.logger;
        let root = paths.root();

        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {
                log.debug(&format!(
                    "Using '{}' (database already exists)",
                    root.display()
                ));
            }
            Ok(_) => {
                return Err(StoreError::io(
                    root,
                    std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        "database root exists and is not a directory",
                    ),
                ));
            }
            Err(_) => {
                log.debug(&format!("Creating the database at '{}'", root.display()));
                fs::create_dir_all(root).map_err(|e| StoreError::io(root, e))?;
            }
        }

        Ok(Self {
            paths,
            locks: LockRegistry::new(),
            log,
        })
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Serialize `value` and atomically persist it as `<collection>/<resource>.json`
    pub fn write<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        resource: &str,
        value: &T,
    ) -> Result<()> {
        validate_name(NameKind::Collection, collection)?;
        validate_name(NameKind::Resource, resource)?;
        self.log.trace(&format!("write {}/{}", collection, resource));

        let lock = self.locks.acquire(collection);
        let _guard = lock_exclusive(&lock);

        let dir = self.paths.collection_dir(collection);
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let bytes =
            writer::to_json_bytes(value).map_err(|source| StoreError::Serialization {
                collection: collection.to_string(),
                resource: resource.to_string(),
                source,
            })?;

        writer::atomic_write(
            &self.paths.temp_file(collection, resource),
            &self.paths.resource_file(collection, resource),
            &bytes,
        )?;

        self.log.debug(&format!(
            "wrote {}/{} ({} bytes)",
            collection,
            resource,
            bytes.len()
        ));
        Ok(())
    }

    /// Load and deserialize `<collection>/<resource>`
    pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T> {
        validate_name(NameKind::Collection, collection)?;
        validate_name(NameKind::Resource, resource)?;
        self.log.trace(&format!("read {}/{}", collection, resource));

        let target = self.paths.target(collection, resource);
        if paths::resolve(&target)
            .map_err(|e| StoreError::io(&target, e))?
            .is_none()
        {
            return Err(StoreError::not_found(collection, resource));
        }

        let text = reader::read_resource(
            &self.paths.resource_file(collection, resource),
            collection,
            resource,
        )?;

        let value = serde_json::from_str(&text).map_err(|source| StoreError::Deserialization {
            collection: collection.to_string(),
            resource: resource.to_string(),
            source,
        })?;

        self.log.debug(&format!(
            "loaded {}/{} ({} bytes)",
            collection,
            resource,
            text.len()
        ));
        Ok(value)
    }

    /// Like [`read`](Self::read), but stores the value into `out`.
    ///
    /// `out` is left untouched when an error is returned.
    pub fn read_into<T: DeserializeOwned>(
        &self,
        collection: &str,
        resource: &str,
        out: &mut T,
    ) -> Result<()> {
        *out = self.read(collection, resource)?;
        Ok(())
    }

    /// Raw JSON text of every resource in `collection`, sorted by file name
    pub fn read_all(&self, collection: &str) -> Result<Vec<String>> {
        let dir = self.existing_collection(collection)?;
        let records = reader::read_collection(&dir)?;
        self.log.debug(&format!(
            "read {} records from {}",
            records.len(),
            collection
        ));
        Ok(records)
    }

    /// Names of the `*.json` resources in `collection`, sorted by file name.
    ///
    /// Other files are still returned by [`read_all`](Self::read_all), so the
    /// two results need not line up index for index.
    pub fn list(&self, collection: &str) -> Result<Vec<String>> {
        let dir = self.existing_collection(collection)?;
        let names = reader::resource_names(&dir)?;
        self.log.debug(&format!(
            "listed {} resources in {}",
            names.len(),
            collection
        ));
        Ok(names)
    }

    /// Delete one resource, or the whole collection when `resource` is empty
    pub fn delete(&self, collection: &str, resource: &str) -> Result<()> {
        validate_name(NameKind::Collection, collection)?;
        if !resource.is_empty() {
            validate_name(NameKind::Resource, resource)?;
        }
        self.log.trace(&format!("delete {}/{}", collection, resource));

        let lock = self.locks.acquire(collection);
        let _guard = lock_exclusive(&lock);

        let target = self.paths.target(collection, resource);
        let resolved = paths::resolve(&target)
            .map_err(|e| StoreError::io(&target, e))?
            .ok_or_else(|| StoreError::not_found(collection, resource))?;

        deleter::remove_resolved(
            &resolved,
            &self.paths.resource_file(collection, resource),
            collection,
            resource,
        )?;

        if resource.is_empty() {
            self.log.debug(&format!("deleted collection {}", collection));
        } else {
            self.log.debug(&format!("deleted {}/{}", collection, resource));
        }
        Ok(())
    }

    fn existing_collection(&self, collection: &str) -> Result<std::path::PathBuf> {
        validate_name(NameKind::Collection, collection)?;
        self.log.trace(&format!("list {}", collection));

        let dir = self.paths.collection_dir(collection);
        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => Ok(dir),
            Ok(_) => Err(StoreError::not_found(collection, "")),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::not_found(collection, ""))
            }
            Err(e) => Err(StoreError::io(dir, e)),
        }
    }
}
