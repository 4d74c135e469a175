//! # registrar-portal
//!
//! The student-management portal: sign-in, the admin panel's registries and
//! the student dashboard, all over the local `registrar-store`.

pub mod commands;
pub mod config;
pub mod error;
pub mod seed;
pub mod session;
pub mod state;
pub mod uploads;

use tracing_subscriber::{fmt, EnvFilter};

pub use commands::dashboard::{DashboardStats, PruneReport};
pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use session::{Session, SessionSync};
pub use state::{Portal, PortalSnapshot};

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("registrar_portal=debug,registrar_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
