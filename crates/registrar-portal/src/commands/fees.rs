use registrar_shared::constants::CASH_METHOD;
use registrar_shared::ledger::apply_payment;
use registrar_shared::User;
use tracing::info;

use crate::error::{PortalError, Result};
use crate::state::Portal;

impl Portal {
    /// Post a payment dated today to a student's ledger.
    pub fn record_payment(&mut self, student_id: &str, amount: i64, method: &str) -> Result<User> {
        let mut users = self.database().get_users()?;
        let student = users
            .iter_mut()
            .find(|u| u.id == student_id && u.is_student())
            .ok_or_else(|| PortalError::not_found("student", student_id))?;

        let updated = apply_payment(student, amount, method, Self::today())?;
        *student = updated.clone();

        self.commit_users(&users)?;
        info!(student_id, amount, method, paid_fee = updated.paid_fee, "Payment recorded");
        Ok(updated)
    }

    /// The admin's quick "cash received" entry.
    pub fn record_cash_payment(&mut self, student_id: &str, amount: i64) -> Result<User> {
        self.record_payment(student_id, amount, CASH_METHOD)
    }

    /// Sum of `paid_fee` across all students.
    pub fn total_collected(&self) -> Result<i64> {
        Ok(self.students()?.iter().map(|u| u.paid_fee).sum())
    }
}
