//! The signed-in user.
//!
//! A [`Session`] holds a snapshot of one user record. The snapshot can go
//! stale when the underlying record is edited, so callers resync it against
//! a fresh user list after every reload.

use registrar_shared::User;

/// Outcome of [`Session::resync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSync {
    /// The snapshot was replaced with the current record.
    Refreshed,
    /// The user no longer exists; the session was ended.
    Cleared,
    /// Nobody is signed in.
    Inactive,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    pub fn begin(&mut self, user: User) {
        self.current = Some(user);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn resync(&mut self, users: &[User]) -> SessionSync {
        let Some(snapshot) = &self.current else {
            return SessionSync::Inactive;
        };
        match users.iter().find(|u| u.id == snapshot.id) {
            Some(fresh) => {
                self.current = Some(fresh.clone());
                SessionSync::Refreshed
            }
            None => {
                self.current = None;
                SessionSync::Cleared
            }
        }
    }
}
