//! Enrollment and the student directory.

use chrono::Utc;
use registrar_shared::enrollment::{next_free_roll_no, AdminProfile, StudentDraft};
use registrar_shared::{User, ValidationError};
use tracing::info;

use crate::error::{PortalError, Result};
use crate::state::Portal;

impl Portal {
    /// All student records in stored order.
    pub fn students(&self) -> Result<Vec<User>> {
        let users = self.database().get_users()?;
        Ok(users.into_iter().filter(User::is_student).collect())
    }

    pub fn student(&self, id: &str) -> Result<User> {
        self.students()?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| PortalError::not_found("student", id))
    }

    /// Admit a new student under a freshly assigned roll number.
    ///
    /// The username may not already be in use as anyone's username or roll
    /// number, otherwise the new account could never sign in.
    pub fn enroll_student(&mut self, draft: StudentDraft) -> Result<User> {
        let mut users = self.database().get_users()?;

        let username = draft.username.trim();
        if !username.is_empty() && users.iter().any(|u| u.answers_to(username)) {
            return Err(ValidationError::invalid(
                "username",
                format!("Username {username} is already taken"),
            )
            .into());
        }

        let roll_no = next_free_roll_no(Utc::now().timestamp_millis(), &users)
            .ok_or_else(|| ValidationError::invalid("rollNo", "No free roll numbers are left"))?;
        let student = draft.enroll(roll_no)?;

        users.push(student.clone());
        self.commit_users(&users)?;
        info!(student_id = %student.id, roll_no = %student.roll_no, "Student enrolled");
        Ok(student)
    }

    /// Edit a student's profile. Ledger, attendance and roll number stay put.
    pub fn update_student(&mut self, id: &str, draft: StudentDraft) -> Result<User> {
        let mut users = self.database().get_users()?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == id && u.is_student())
            .ok_or_else(|| PortalError::not_found("student", id))?;

        let username = draft.username.trim().to_string();
        let updated = draft.merge_into(slot)?;
        *slot = updated.clone();

        ensure_username_free(&users, id, &username)?;

        self.commit_users(&users)?;
        info!(student_id = %id, "Student profile updated");
        Ok(updated)
    }

    /// Remove a student. Their certificates and results are kept.
    pub fn delete_student(&mut self, id: &str) -> Result<bool> {
        let mut users = self.database().get_users()?;
        let before = users.len();
        users.retain(|u| !(u.id == id && u.is_student()));
        if users.len() == before {
            return Ok(false);
        }

        self.commit_users(&users)?;
        info!(student_id = %id, "Student deleted");
        Ok(true)
    }

    pub fn search_students(&self, term: &str) -> Result<Vec<User>> {
        let term = term.trim();
        Ok(self
            .students()?
            .into_iter()
            .filter(|u| u.matches_search(term))
            .collect())
    }

    /// Update the administrator account. Blank fields keep their value.
    pub fn update_admin_profile(&mut self, profile: AdminProfile) -> Result<User> {
        let mut users = self.database().get_users()?;
        let admin = users
            .iter_mut()
            .find(|u| u.is_admin())
            .ok_or_else(|| PortalError::not_found("admin", "admin"))?;

        let updated = profile.apply_to(admin);
        *admin = updated.clone();

        if let Some(username) = &updated.username {
            ensure_username_free(&users, &updated.id, username)?;
        }

        self.commit_users(&users)?;
        info!(admin_id = %updated.id, "Admin profile updated");
        Ok(updated)
    }
}

/// Reject `username` if any user other than `owner_id` already answers to it.
fn ensure_username_free(users: &[User], owner_id: &str, username: &str) -> Result<()> {
    if users.iter().any(|u| u.id != owner_id && u.answers_to(username)) {
        return Err(ValidationError::invalid(
            "username",
            format!("Username {username} is already taken"),
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSync;
    use crate::state::tests::demo_portal;

    fn draft(username: &str) -> StudentDraft {
        StudentDraft {
            name: "Bilal Ahmed".into(),
            class: "CIT".into(),
            username: username.into(),
            password: "secret".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_enroll_student() {
        let mut portal = demo_portal();
        let student = portal.enroll_student(draft("bilal")).unwrap();

        assert!(student.roll_no.starts_with("NTZ-"));
        assert_eq!(student.roll_no.len(), 8);
        assert_eq!(student.total_fee, 30_000);
        assert_eq!(portal.students().unwrap().len(), 3);
        assert!(portal.login("bilal", "secret").is_ok());
    }

    #[test]
    fn test_enroll_rejects_taken_identifier() {
        let mut portal = demo_portal();

        let err = portal.enroll_student(draft("ahmed")).unwrap_err();
        assert!(matches!(err, PortalError::Validation(ref v) if v.mentions("username")));

        let err = portal.enroll_student(draft("NTIZB143")).unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
        assert_eq!(portal.students().unwrap().len(), 2);
    }

    #[test]
    fn test_enroll_missing_fields_changes_nothing() {
        let mut portal = demo_portal();
        let before = portal.database().get_users().unwrap();

        let err = portal.enroll_student(StudentDraft::default()).unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
        assert_eq!(portal.database().get_users().unwrap(), before);
    }

    #[test]
    fn test_update_student_keeps_ledger() {
        let mut portal = demo_portal();
        let before = portal.student("1").unwrap();

        let mut edit = draft("ahmed");
        edit.name = "Ahmed Khan Kakar".into();
        let updated = portal.update_student("1", edit).unwrap();

        assert_eq!(updated.name, "Ahmed Khan Kakar");
        assert_eq!(updated.paid_fee, before.paid_fee);
        assert_eq!(updated.payment_history, before.payment_history);
        assert_eq!(updated.attendance, before.attendance);
        assert_eq!(updated.roll_no, before.roll_no);
    }

    #[test]
    fn test_update_student_rejects_collision() {
        let mut portal = demo_portal();
        let before = portal.database().get_users().unwrap();

        assert!(portal.update_student("1", draft("sara")).is_err());
        assert_eq!(portal.database().get_users().unwrap(), before);
    }

    #[test]
    fn test_update_missing_student() {
        let mut portal = demo_portal();
        let err = portal.update_student("nope", draft("x")).unwrap_err();
        assert!(matches!(err, PortalError::NotFound { kind: "student", .. }));
    }

    #[test]
    fn test_delete_student_ends_their_session() {
        let mut portal = demo_portal();
        portal.login("sara", "password123").unwrap();

        assert!(portal.delete_student("2").unwrap());
        assert!(!portal.session().is_active());
        assert!(portal.database().load_session().unwrap().is_none());

        let snapshot = portal.refresh_all().unwrap();
        assert_eq!(snapshot.session, SessionSync::Inactive);
        assert_eq!(snapshot.students.len(), 1);
    }

    #[test]
    fn test_delete_missing_student_is_noop() {
        let mut portal = demo_portal();
        let before = portal.database().get_users().unwrap();

        assert!(!portal.delete_student("nope").unwrap());
        assert!(!portal.delete_student("admin").unwrap());
        assert_eq!(portal.database().get_users().unwrap(), before);
    }

    #[test]
    fn test_search_students() {
        let portal = demo_portal();

        let by_name = portal.search_students("SARA").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "2");

        assert_eq!(portal.search_students("2024-00").unwrap().len(), 2);
        assert!(portal.search_students("Registrar").unwrap().is_empty());
    }

    #[test]
    fn test_update_admin_profile_refreshes_session() {
        let mut portal = demo_portal();
        portal.login("admin", "NTIZB143").unwrap();

        portal
            .update_admin_profile(AdminProfile {
                name: Some("Principal Zhob".into()),
                password: Some("changed".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            portal.current_user().map(|u| u.name.as_str()),
            Some("Principal Zhob")
        );
        assert!(portal.login("admin", "NTIZB143").is_err());
        assert!(portal.login("admin", "changed").is_ok());
    }

    #[test]
    fn test_admin_username_cannot_shadow_another_login() {
        let mut portal = demo_portal();
        let before = portal.database().get_users().unwrap();

        for taken in ["sara", "NTZ-2024-001"] {
            let err = portal
                .update_admin_profile(AdminProfile {
                    username: Some(taken.into()),
                    ..Default::default()
                })
                .unwrap_err();
            assert!(matches!(err, PortalError::Validation(ref v) if v.mentions("username")));
        }

        assert_eq!(portal.database().get_users().unwrap(), before);
        assert!(portal.login("sara", "password123").is_ok());
        assert!(portal.login("admin", "NTIZB143").is_ok());
    }

    #[test]
    fn test_admin_may_keep_own_roll_no_as_username() {
        let mut portal = demo_portal();
        let admin = portal
            .update_admin_profile(AdminProfile {
                username: Some("NTIZB143".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(admin.username.as_deref(), Some("NTIZB143"));
    }
}
