//! Certificate and result collections.

use registrar_shared::{Certificate, ExamResult};

use crate::database::Database;
use crate::error::Result;
use crate::slots::Slot;

impl Database {
    pub fn get_certificates(&self) -> Result<Vec<Certificate>> {
        self.load_list(Slot::Certificates)
    }

    pub fn save_certificates(&self, certificates: &[Certificate]) -> Result<()> {
        self.store_document(Slot::Certificates, certificates)
    }

    pub fn get_results(&self) -> Result<Vec<ExamResult>> {
        self.load_list(Slot::Results)
    }

    pub fn save_results(&self, results: &[ExamResult]) -> Result<()> {
        self.store_document(Slot::Results, results)
    }
}
