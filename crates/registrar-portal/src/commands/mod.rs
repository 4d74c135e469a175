//! Portal commands.
//!
//! Each sub-module adds an `impl Portal` block for one area of the admin
//! panel or student dashboard. Every command reads the collections it needs,
//! applies a rule from `registrar-shared`, and saves the whole collection
//! back. A rejected command leaves the store untouched.

pub mod attendance;
pub mod auth;
pub mod certificates;
pub mod dashboard;
pub mod events;
pub mod fees;
pub mod gallery;
pub mod quiz;
pub mod results;
pub mod settings;
pub mod students;
pub mod timetable;
