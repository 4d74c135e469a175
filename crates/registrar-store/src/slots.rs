//! Whole-document slots.
//!
//! A slot is one row of the `slots` table holding a complete JSON document.
//! Reads tolerate a corrupt document by treating it as absent; writes replace
//! the document in a single statement or fail without touching it.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::Database;
use crate::error::{Result, StoreError};

/// Named storage slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Users,
    Certificates,
    Results,
    Events,
    Timetable,
    Gallery,
    Settings,
    Quiz,
    Session,
}

impl Slot {
    pub const ALL: [Slot; 9] = [
        Slot::Users,
        Slot::Certificates,
        Slot::Results,
        Slot::Events,
        Slot::Timetable,
        Slot::Gallery,
        Slot::Settings,
        Slot::Quiz,
        Slot::Session,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Slot::Users => "users",
            Slot::Certificates => "certificates",
            Slot::Results => "results",
            Slot::Events => "events",
            Slot::Timetable => "timetable",
            Slot::Gallery => "gallery",
            Slot::Settings => "settings",
            Slot::Quiz => "quiz",
            Slot::Session => "session",
        }
    }

    /// The session snapshot has its own budget and never counts toward the quota.
    fn counts_toward_quota(&self) -> bool {
        *self != Slot::Session
    }
}

impl Database {
    /// Full storage key for `slot`, including the namespace prefix.
    pub fn slot_key(&self, slot: Slot) -> String {
        format!("{}{}", self.options().namespace, slot.name())
    }

    fn read_slot(&self, slot: Slot) -> Result<Option<String>> {
        let json = self
            .conn()
            .query_row(
                "SELECT json FROM slots WHERE key = ?1",
                params![self.slot_key(slot)],
                |row| row.get(0),
            )
            .optional()?;
        Ok(json)
    }

    /// Read a collection slot. Unset or corrupt reads as empty.
    pub(crate) fn load_list<T: DeserializeOwned>(&self, slot: Slot) -> Result<Vec<T>> {
        Ok(self.load_document(slot)?.unwrap_or_default())
    }

    /// Read a single-document slot. Unset or corrupt reads as `None`.
    pub(crate) fn load_document<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>> {
        let Some(json) = self.read_slot(slot)? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(
                    slot = slot.name(),
                    error = %e,
                    "discarding unreadable slot contents"
                );
                Ok(None)
            }
        }
    }

    /// Serialize `value` and overwrite the slot with it.
    pub(crate) fn store_document<T: Serialize + ?Sized>(
        &self,
        slot: Slot,
        value: &T,
    ) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let key = self.slot_key(slot);

        if slot.counts_toward_quota() {
            let others = self.usage_excluding(&key)?;
            let needed = others + json.len();
            let quota = self.options().quota_bytes;
            if needed > quota {
                tracing::warn!(slot = slot.name(), needed, quota, "storage quota exceeded");
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }

        self.conn().execute(
            "INSERT INTO slots (key, json, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET json = excluded.json, updated_at = excluded.updated_at",
            params![key, json, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!(slot = slot.name(), bytes = json.len(), "slot saved");
        Ok(())
    }

    /// Delete the slot entirely. Returns `true` if it existed.
    pub(crate) fn remove_slot(&self, slot: Slot) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM slots WHERE key = ?1", params![self.slot_key(slot)])?;
        Ok(affected > 0)
    }

    /// Bytes currently used by the record slots of this namespace.
    pub fn usage_bytes(&self) -> Result<usize> {
        self.usage_excluding(&self.slot_key(Slot::Session))
    }

    fn usage_excluding(&self, key: &str) -> Result<usize> {
        let keys: Vec<String> = Slot::ALL
            .iter()
            .filter(|s| s.counts_toward_quota())
            .map(|s| self.slot_key(*s))
            .filter(|k| k != key)
            .collect();

        let mut total = 0usize;
        for k in keys {
            let bytes: Option<i64> = self
                .conn()
                .query_row(
                    "SELECT LENGTH(CAST(json AS BLOB)) FROM slots WHERE key = ?1",
                    params![k],
                    |row| row.get(0),
                )
                .optional()?;
            total += bytes.unwrap_or(0) as usize;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreOptions;

    fn db_with_quota(quota_bytes: usize) -> Database {
        Database::open_in_memory(StoreOptions {
            quota_bytes,
            ..StoreOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn test_slot_keys_carry_namespace() {
        let db = Database::open_in_memory(StoreOptions {
            namespace: "ntz_".into(),
            ..StoreOptions::default()
        })
        .unwrap();
        assert_eq!(db.slot_key(Slot::Users), "ntz_users");
        assert_eq!(db.slot_key(Slot::Quiz), "ntz_quiz");
    }

    #[test]
    fn test_unset_slot_reads_empty() {
        let db = db_with_quota(1024);
        let list: Vec<String> = db.load_list(Slot::Events).unwrap();
        assert!(list.is_empty());
        let doc: Option<String> = db.load_document(Slot::Settings).unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn test_corrupt_slot_reads_empty() {
        let db = db_with_quota(1024);
        db.conn()
            .execute(
                "INSERT INTO slots (key, json, updated_at) VALUES (?1, '{not json', '')",
                params![db.slot_key(Slot::Events)],
            )
            .unwrap();

        let list: Vec<String> = db.load_list(Slot::Events).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_quota_rejects_and_keeps_previous_contents() {
        let db = db_with_quota(64);
        db.store_document(Slot::Events, &vec!["short"]).unwrap();

        let big = vec!["x".repeat(100)];
        let err = db.store_document(Slot::Events, &big).unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { quota: 64, .. }));

        let list: Vec<String> = db.load_list(Slot::Events).unwrap();
        assert_eq!(list, vec!["short".to_string()]);
    }

    #[test]
    fn test_quota_counts_other_slots() {
        let db = db_with_quota(40);
        db.store_document(Slot::Events, &vec!["a".repeat(20)]).unwrap();
        assert!(db
            .store_document(Slot::Gallery, &vec!["b".repeat(20)])
            .is_err());
        assert_eq!(db.usage_bytes().unwrap(), 24);
    }

    #[test]
    fn test_session_is_outside_quota() {
        let db = db_with_quota(8);
        db.store_document(Slot::Session, &"a much longer snapshot").unwrap();
        assert_eq!(db.usage_bytes().unwrap(), 0);
    }

    #[test]
    fn test_remove_slot() {
        let db = db_with_quota(1024);
        db.store_document(Slot::Quiz, &Vec::<String>::new()).unwrap();
        assert!(db.remove_slot(Slot::Quiz).unwrap());
        assert!(!db.remove_slot(Slot::Quiz).unwrap());
    }
}
