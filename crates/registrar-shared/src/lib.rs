//! # registrar-shared
//!
//! Record types and the pure rules every other registrar crate builds on:
//! fee ledger arithmetic, attendance, registry drafts, the typing trainer
//! and quiz scoring. Nothing in here touches storage.

pub mod attendance;
pub mod constants;
pub mod content;
pub mod enrollment;
pub mod error;
pub mod ledger;
pub mod quiz;
pub mod records;
pub mod registry;
pub mod types;
pub mod typing;

pub use error::ValidationError;
pub use records::*;
pub use types::*;
