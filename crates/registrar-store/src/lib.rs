//! # registrar-store
//!
//! Local persistence for the registrar portal, backed by SQLite.
//!
//! Each record kind lives in one named slot as a whole-collection JSON
//! document; every save overwrites the entire slot. The crate exposes a
//! synchronous `Database` handle with a typed `get_*` / `save_*` pair per
//! collection plus the settings object and the session snapshot.
//!
//! Two handles on the same file do not coordinate: the last writer wins.

pub mod content;
pub mod database;
pub mod migrations;
pub mod registries;
pub mod settings;
pub mod slots;
pub mod users;

mod error;

pub use database::{Database, StoreOptions};
pub use error::{Result, StoreError};
pub use slots::Slot;
