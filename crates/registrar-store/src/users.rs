//! User collection and the session snapshot.

use registrar_shared::User;

use crate::database::Database;
use crate::error::Result;
use crate::slots::Slot;

impl Database {
    /// All users in stored order. Empty when unset or unreadable.
    pub fn get_users(&self) -> Result<Vec<User>> {
        self.load_list(Slot::Users)
    }

    /// Overwrite the whole user collection.
    pub fn save_users(&self, users: &[User]) -> Result<()> {
        self.store_document(Slot::Users, users)
    }

    /// The persisted session snapshot, if any.
    pub fn load_session(&self) -> Result<Option<User>> {
        self.load_document(Slot::Session)
    }

    pub fn save_session(&self, user: &User) -> Result<()> {
        self.store_document(Slot::Session, user)
    }

    /// Returns `true` if a snapshot was removed.
    pub fn clear_session(&self) -> Result<bool> {
        self.remove_slot(Slot::Session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreOptions;
    use registrar_shared::enrollment::StudentDraft;
    use registrar_shared::records::EnrollmentProfile;

    fn student(name: &str, roll_no: &str) -> User {
        StudentDraft {
            name: name.into(),
            class: "CIT".into(),
            username: name.to_lowercase(),
            password: "password123".into(),
            total_fee: Some(25_000),
            profile: EnrollmentProfile::default(),
        }
        .enroll(roll_no.into())
        .unwrap()
    }

    #[test]
    fn test_users_round_trip() {
        let db = Database::open_in_memory(StoreOptions::default()).unwrap();
        assert!(db.get_users().unwrap().is_empty());

        let one = vec![student("Ahmed", "NTZ-0001")];
        db.save_users(&one).unwrap();
        assert_eq!(db.get_users().unwrap(), one);

        let many = vec![
            student("Ahmed", "NTZ-0001"),
            student("Sara", "NTZ-0002"),
            student("Bilal", "NTZ-0003"),
        ];
        db.save_users(&many).unwrap();
        assert_eq!(db.get_users().unwrap(), many);

        db.save_users(&[]).unwrap();
        assert!(db.get_users().unwrap().is_empty());
    }

    #[test]
    fn test_session_round_trip() {
        let db = Database::open_in_memory(StoreOptions::default()).unwrap();
        assert!(db.load_session().unwrap().is_none());

        let user = student("Sara", "NTZ-0002");
        db.save_session(&user).unwrap();
        assert_eq!(db.load_session().unwrap(), Some(user));

        assert!(db.clear_session().unwrap());
        assert!(db.load_session().unwrap().is_none());
    }

    #[test]
    fn test_users_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrar.db");
        let users = vec![student("Ahmed", "NTZ-0001")];

        {
            let db = Database::open_at(&path, StoreOptions::default()).unwrap();
            db.save_users(&users).unwrap();
        }

        let db = Database::open_at(&path, StoreOptions::default()).unwrap();
        assert_eq!(db.get_users().unwrap(), users);
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.db");
        let a = Database::open_at(&path, StoreOptions::default()).unwrap();
        a.save_users(&[student("Ahmed", "NTZ-0001")]).unwrap();

        let b = Database::open_at(
            &path,
            StoreOptions {
                namespace: "other_".into(),
                ..StoreOptions::default()
            },
        )
        .unwrap();
        assert!(b.get_users().unwrap().is_empty());
    }
}
