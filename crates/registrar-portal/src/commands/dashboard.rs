//! Admin overview figures and registry maintenance.

use registrar_shared::registry::remove_orphans;
use tracing::info;

use crate::error::Result;
use crate::state::Portal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub students: usize,
    pub certificates: usize,
    pub total_collected: i64,
    pub events: usize,
}

/// How many dangling registry records [`Portal::prune_orphans`] removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub certificates: usize,
    pub results: usize,
}

impl Portal {
    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        let students = self.students()?;
        Ok(DashboardStats {
            students: students.len(),
            certificates: self.database().get_certificates()?.len(),
            total_collected: students.iter().map(|u| u.paid_fee).sum(),
            events: self.database().get_events()?.len(),
        })
    }

    /// Drop certificates and results whose student no longer exists.
    ///
    /// Never runs implicitly; deleting a student leaves their records behind.
    pub fn prune_orphans(&self) -> Result<PruneReport> {
        let users = self.database().get_users()?;
        let mut report = PruneReport::default();

        let mut certificates = self.database().get_certificates()?;
        report.certificates = remove_orphans(&mut certificates, &users);
        if report.certificates > 0 {
            self.database().save_certificates(&certificates)?;
        }

        let mut results = self.database().get_results()?;
        report.results = remove_orphans(&mut results, &users);
        if report.results > 0 {
            self.database().save_results(&results)?;
        }

        info!(
            certificates = report.certificates,
            results = report.results,
            "Pruned orphaned registry records"
        );
        Ok(report)
    }
}
