//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation. Every typed accessor in
//! this crate is an `impl Database` block over the generic slot helpers in
//! [`crate::slots`].

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use registrar_shared::constants::{DEFAULT_STORAGE_QUOTA, STORAGE_NAMESPACE};
use rusqlite::Connection;

use crate::error::{Result, StoreError};
use crate::migrations;

/// How slots are named and how much they may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Prefix prepended to every slot key, e.g. `sms_` gives `sms_users`.
    pub namespace: String,
    /// Upper bound on the summed JSON size of all record slots, in bytes.
    pub quota_bytes: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            namespace: STORAGE_NAMESPACE.to_string(),
            quota_bytes: DEFAULT_STORAGE_QUOTA,
        }
    }
}

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
    options: StoreOptions,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/registrar/registrar.db`
    /// - macOS:   `~/Library/Application Support/org.registrar.registrar/registrar.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\registrar\registrar\data\registrar.db`
    pub fn new(options: StoreOptions) -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("org", "registrar", "registrar").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("registrar.db");

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path, options)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// Missing parent directories are created.
    pub fn open_at(path: &Path, options: StoreOptions) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Self::init(conn, options)
    }

    /// Open a private in-memory database. Everything is lost on drop.
    pub fn open_in_memory(options: StoreOptions) -> Result<Self> {
        Self::init(Connection::open_in_memory()?, options)
    }

    fn init(conn: Connection, options: StoreOptions) -> Result<Self> {
        migrations::run_migrations(&conn)?;
        Ok(Self { conn, options })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn
            .path()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}
