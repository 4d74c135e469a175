//! Admission and profile editing.

use serde::{Deserialize, Serialize};

use crate::attendance::enrollment_history;
use crate::constants::{DEFAULT_TOTAL_FEE, ROLL_NO_PREFIX};
use crate::error::{Required, ValidationError};
use crate::records::{EnrollmentProfile, User};
use crate::registry::non_blank;
use crate::types::{new_id, Role};

/// Admission form. Also used to edit an existing student's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentDraft {
    pub name: String,
    pub class: String,
    pub username: String,
    pub password: String,
    pub total_fee: Option<i64>,
    #[serde(flatten)]
    pub profile: EnrollmentProfile,
}

impl StudentDraft {
    fn check(&self) -> Result<(), ValidationError> {
        Required::default()
            .text("name", &self.name)
            .text("class", &self.class)
            .text("username", &self.username)
            .text("password", &self.password)
            .finish()?;
        if let Some(fee) = self.total_fee {
            if fee < 0 {
                return Err(ValidationError::invalid(
                    "totalFee",
                    "Total fee cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Build a new student record carrying `roll_no`.
    ///
    /// The ledger starts empty and attendance starts at zero with the
    /// registration entry as its only history point.
    pub fn enroll(self, roll_no: String) -> Result<User, ValidationError> {
        self.check()?;
        Ok(User {
            id: new_id(),
            name: self.name.trim().to_string(),
            roll_no,
            username: Some(self.username.trim().to_string()),
            password: Some(self.password),
            class: self.class.trim().to_string(),
            role: Role::Student,
            attendance: 0,
            attendance_history: enrollment_history(),
            profile: self.profile,
            total_fee: self.total_fee.unwrap_or(DEFAULT_TOTAL_FEE),
            paid_fee: 0,
            payment_history: Vec::new(),
        })
    }

    /// Apply the form to an existing student.
    ///
    /// Identity (`id`, `rollNo`, `role`), the ledger and attendance are
    /// carried over untouched.
    pub fn merge_into(self, existing: &User) -> Result<User, ValidationError> {
        self.check()?;
        let mut updated = existing.clone();
        updated.name = self.name.trim().to_string();
        updated.class = self.class.trim().to_string();
        updated.username = Some(self.username.trim().to_string());
        updated.password = Some(self.password);
        if let Some(fee) = self.total_fee {
            updated.total_fee = fee;
        }
        updated.profile = self.profile;
        Ok(updated)
    }
}

/// Editable fields of the administrator account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminProfile {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub photo: Option<String>,
}

impl AdminProfile {
    /// Blank fields keep their current value.
    pub fn apply_to(self, admin: &User) -> User {
        let mut updated = admin.clone();
        if let Some(name) = non_blank(self.name) {
            updated.name = name;
        }
        if let Some(username) = non_blank(self.username) {
            updated.username = Some(username);
        }
        if let Some(password) = self.password.filter(|p| !p.is_empty()) {
            updated.password = Some(password);
        }
        if let Some(photo) = self.photo.filter(|p| !p.is_empty()) {
            updated.profile.photo = Some(photo);
        }
        updated
    }
}

/// `NTZ-` plus the last four digits of a millisecond timestamp.
pub fn roll_no_from_millis(millis: i64) -> String {
    format!("{ROLL_NO_PREFIX}{:04}", millis.rem_euclid(10_000))
}

/// First roll number from `millis` onward that no user answers to yet,
/// whether as a roll number or as a username.
///
/// Returns `None` only when all ten thousand suffixes are taken.
pub fn next_free_roll_no(millis: i64, users: &[User]) -> Option<String> {
    (0..10_000)
        .map(|offset| roll_no_from_millis(millis + offset))
        .find(|candidate| users.iter().all(|u| !u.answers_to(candidate)))
}
