use registrar_portal::{init_tracing, Portal, PortalConfig};
use registrar_shared::constants::APP_NAME;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("Starting {APP_NAME} portal v{}", env!("CARGO_PKG_VERSION"));

    let config = PortalConfig::from_env();
    info!(?config, "Loaded configuration");

    let mut portal = Portal::open(config)?;
    if let Some(user) = portal.restore_session()? {
        info!(user_id = %user.id, "Resuming previous session");
    }

    let snapshot = portal.refresh_all()?;
    info!(
        students = snapshot.students.len(),
        certificates = snapshot.certificates.len(),
        results = snapshot.results.len(),
        events = snapshot.events.len(),
        session = ?snapshot.session,
        "Portal ready"
    );

    let stats = portal.dashboard_stats()?;
    info!(
        total_collected = stats.total_collected,
        storage_bytes = portal.database().usage_bytes()?,
        "Dashboard"
    );

    Ok(())
}
