use registrar_shared::attendance::set_attendance;
use registrar_shared::User;
use tracing::info;

use crate::error::{PortalError, Result};
use crate::state::Portal;

impl Portal {
    /// Overwrite a student's current attendance percentage.
    pub fn update_attendance(&mut self, student_id: &str, percentage: u8) -> Result<User> {
        let mut users = self.database().get_users()?;
        let student = users
            .iter_mut()
            .find(|u| u.id == student_id && u.is_student())
            .ok_or_else(|| PortalError::not_found("student", student_id))?;

        let updated = set_attendance(student, percentage)?;
        *student = updated.clone();

        self.commit_users(&users)?;
        info!(student_id, percentage, "Attendance updated");
        Ok(updated)
    }
}
