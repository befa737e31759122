//! # jsondb
//!
//! A small on-disk JSON document store. Records ("resources") are grouped into
//! named folders ("collections") and stored one file each at
//! `<root>/<collection>/<resource>.json`, pretty-printed with tab indentation.
//!
//! ## Guarantees
//!
//! - Writes go to a temp file that is renamed over the target, so a completed
//!   resource file always holds complete JSON.
//! - Writes and deletes on the same collection are serialized by a
//!   per-collection lock; different collections proceed in parallel.
//! - Reads take no lock. Callers that need strict read/write exclusion must
//!   synchronize themselves.
//! - Coordination is in-process only. Two processes sharing a root are
//!   protected by nothing but the atomicity of rename.
//!
//! ## Example
//!
//! ```no_run
//! use jsondb::{Driver, Options};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! let db = Driver::open("./data", Options::default())?;
//! db.write("users", "john", &User { name: "John".into() })?;
//!
//! let john: User = db.read("users", "john")?;
//! assert_eq!(john.name, "John");
//!
//! for raw in db.read_all("users")? {
//!     let user: User = serde_json::from_str(&raw).expect("stored as JSON");
//!     println!("{}", user.name);
//! }
//! # Ok::<(), jsondb::StoreError>(())
//! ```

mod deleter;
mod driver;
pub mod error;
pub mod locks;
pub mod logger;
mod options;
pub mod paths;
mod reader;
pub mod writer;

pub use driver::Driver;
pub use error::{ErrorKind, NameKind, Result, StoreError};
pub use locks::{CollectionLock, LockRegistry};
pub use logger::{LogLevel, Logger, NullLogger, ParseLogLevelError, TracingLogger};
pub use options::Options;
pub use paths::StorePaths;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
