use registrar_shared::User;
use tracing::{info, warn};

use crate::error::{PortalError, Result};
use crate::state::Portal;

impl Portal {
    /// Sign in with a roll number or username.
    ///
    /// The first user answering to `identifier` is the only candidate.
    /// Unknown identifiers and wrong passwords fail the same way.
    pub fn login(&mut self, identifier: &str, password: &str) -> Result<User> {
        let users = self.database().get_users()?;
        let found = users
            .into_iter()
            .find(|u| u.answers_to(identifier))
            .filter(|u| u.password.as_deref() == Some(password));

        let Some(user) = found else {
            warn!("Rejected sign-in attempt");
            return Err(PortalError::InvalidCredentials);
        };

        self.database().save_session(&user)?;
        self.session_mut().begin(user.clone());
        info!(user_id = %user.id, role = ?user.role, "User signed in");
        Ok(user)
    }

    /// End the session. Record slots are left alone.
    pub fn logout(&mut self) -> Result<()> {
        self.session_mut().clear();
        self.database().clear_session()?;
        info!("User signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PortalError;
    use crate::state::tests::demo_portal;

    #[test]
    fn test_login_by_username_and_roll_no() {
        let mut portal = demo_portal();

        let user = portal.login("ahmed", "password123").unwrap();
        assert_eq!(user.roll_no, "NTZ-2024-001");
        assert!(portal.session().is_active());

        let admin = portal.login("NTIZB143", "NTIZB143").unwrap();
        assert!(admin.is_admin());
        assert_eq!(portal.current_user().map(|u| u.id.as_str()), Some("admin"));
    }

    #[test]
    fn test_login_failures_are_indistinguishable() {
        let mut portal = demo_portal();

        let wrong_password = portal.login("ahmed", "nope").unwrap_err();
        let unknown_user = portal.login("nobody", "password123").unwrap_err();

        assert!(matches!(wrong_password, PortalError::InvalidCredentials));
        assert!(matches!(unknown_user, PortalError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.to_string(), "invalid credentials");
        assert!(!portal.session().is_active());
    }

    #[test]
    fn test_first_match_wins() {
        let mut portal = demo_portal();
        let mut users = portal.database().get_users().unwrap();
        // a later user whose username collides with an earlier roll number
        users[1].username = Some("NTZ-2024-001".into());
        users[1].password = Some("sara-pass".into());
        portal.database().save_users(&users).unwrap();

        assert!(portal.login("NTZ-2024-001", "sara-pass").is_err());
        assert!(portal.login("NTZ-2024-001", "password123").is_ok());
    }

    #[test]
    fn test_logout_clears_session_only() {
        let mut portal = demo_portal();
        portal.login("sara", "password123").unwrap();
        assert!(portal.database().load_session().unwrap().is_some());

        portal.logout().unwrap();
        assert!(!portal.session().is_active());
        assert!(portal.database().load_session().unwrap().is_none());
        assert_eq!(portal.database().get_users().unwrap().len(), 3);
    }
}
