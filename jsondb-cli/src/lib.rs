//! Command-line front end for the jsondb document store.
//!
//! Commands:
//! - `jsondb seed`: store the demo employees in `users` and print them back
//! - `jsondb write <collection> <resource> <json>`: store a JSON document
//! - `jsondb read <collection> <resource>`: print one document
//! - `jsondb list <collection>`: print resource names
//! - `jsondb dump <collection>`: print every raw document
//! - `jsondb delete <collection> [resource]`: delete a resource or a whole collection

pub mod demo;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jsondb::{Driver, LogLevel, Options};
use std::io::Write;
use std::path::PathBuf;

/// Default store location when neither `--root` nor `JSONDB_ROOT` is given
pub const DEFAULT_ROOT: &str = "./data";

#[derive(Debug, Parser)]
#[command(name = "jsondb", version, about = "On-disk JSON document store")]
pub struct Cli {
    /// Root directory of the store
    #[arg(long, env = "JSONDB_ROOT", default_value = DEFAULT_ROOT, global = true)]
    pub root: PathBuf,

    /// Driver log level (fatal, error, warn, info, debug, trace)
    #[arg(long, env = "JSONDB_LOG", default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Shorthand for --log-level debug
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the demo employees to `users`, then read them back
    Seed,
    /// Store a JSON document
    Write {
        collection: String,
        resource: String,
        /// Document body, as JSON text
        json: String,
    },
    /// Print one document
    Read { collection: String, resource: String },
    /// Print the resource names in a collection
    List { collection: String },
    /// Print the raw text of every document in a collection
    Dump { collection: String },
    /// Delete a resource, or the whole collection when no resource is given
    Delete {
        collection: String,
        resource: Option<String>,
    },
}

impl Cli {
    /// Effective driver log level after applying `--debug`
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            self.log_level.max(LogLevel::Debug)
        } else {
            self.log_level
        }
    }
}

/// `tracing-subscriber` filter directive matching a driver log level
pub fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Fatal | LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

/// Open the store and execute the parsed command, writing results to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let options = Options::new().with_log_level(cli.effective_log_level());
    let db = Driver::open(&cli.root, options)
        .with_context(|| format!("failed to open store at {}", cli.root.display()))?;

    match &cli.command {
        Commands::Seed => seed(&db, out),
        Commands::Write {
            collection,
            resource,
            json,
        } => {
            let value: serde_json::Value =
                serde_json::from_str(json).context("document is not valid JSON")?;
            db.write(collection, resource, &value)?;
            writeln!(out, "wrote {}/{}", collection, resource)?;
            Ok(())
        }
        Commands::Read {
            collection,
            resource,
        } => {
            let value: serde_json::Value = db.read(collection, resource)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            Ok(())
        }
        Commands::List { collection } => {
            for name in db.list(collection)? {
                writeln!(out, "{}", name)?;
            }
            Ok(())
        }
        Commands::Dump { collection } => {
            for raw in db.read_all(collection)? {
                write!(out, "{}", raw)?;
            }
            Ok(())
        }
        Commands::Delete {
            collection,
            resource,
        } => {
            let resource = resource.as_deref().unwrap_or("");
            db.delete(collection, resource)?;
            if resource.is_empty() {
                writeln!(out, "deleted collection {}", collection)?;
            } else {
                writeln!(out, "deleted {}/{}", collection, resource)?;
            }
            Ok(())
        }
    }
}

fn seed(db: &Driver, out: &mut impl Write) -> anyhow::Result<()> {
    for user in demo::employees() {
        db.write(demo::USERS, &user.name, &user)
            .with_context(|| format!("failed to store {}", user.name))?;
    }

    let records = db.read_all(demo::USERS)?;
    tracing::debug!(count = records.len(), "read back demo users");

    let mut users = Vec::with_capacity(records.len());
    for raw in &records {
        match serde_json::from_str::<demo::User>(raw) {
            Ok(user) => users.push(user),
            Err(e) => tracing::warn!(%e, "skipping unreadable record"),
        }
    }

    writeln!(out, "{} users in '{}':", users.len(), demo::USERS)?;
    for user in &users {
        writeln!(
            out,
            "  {} ({}), {} - {}",
            user.name, user.age, user.company, user.address.city
        )?;
    }
    Ok(())
}
