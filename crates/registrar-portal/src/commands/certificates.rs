//! Certificate registry.

use registrar_shared::registry::{list_for_student, remove_by_id, CertificateDraft};
use registrar_shared::Certificate;
use tracing::info;

use crate::error::Result;
use crate::state::Portal;

impl Portal {
    pub fn certificates(&self) -> Result<Vec<Certificate>> {
        Ok(self.database().get_certificates()?)
    }

    /// Issue a certificate dated today. The student is not checked to exist.
    pub fn issue_certificate(&self, draft: CertificateDraft) -> Result<Certificate> {
        let certificate = draft.issue(Self::today(), &mut rand::thread_rng())?;

        let mut all = self.database().get_certificates()?;
        all.push(certificate.clone());
        self.database().save_certificates(&all)?;

        info!(
            certificate_no = %certificate.certificate_no,
            student_id = %certificate.student_id,
            "Certificate issued"
        );
        Ok(certificate)
    }

    pub fn certificates_for_student(&self, student_id: &str) -> Result<Vec<Certificate>> {
        let all = self.database().get_certificates()?;
        Ok(list_for_student(&all, student_id)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Returns `false` when no certificate has that id.
    pub fn delete_certificate(&self, id: &str) -> Result<bool> {
        let mut all = self.database().get_certificates()?;
        if !remove_by_id(&mut all, id) {
            return Ok(false);
        }
        self.database().save_certificates(&all)?;
        info!(certificate_id = %id, "Certificate deleted");
        Ok(true)
    }
}
