//! Certificate and result registries.
//!
//! Both are append-only collections of records that reference a student by
//! id. Records are created here from admin drafts; the caller appends them
//! and re-saves the whole collection.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CERTIFICATE_NO_PREFIX, CERTIFICATE_TOKEN_LEN, DEFAULT_CERTIFICATE_GRADE, DEFAULT_MAX_MARKS,
    GRADE_A_PLUS_MIN_MARKS, GRADE_B_MIN_MARKS,
};
use crate::error::{Required, ValidationError};
use crate::records::{Certificate, ExamResult, Identified, StudentRecord, User};
use crate::types::{new_id, CertificateStatus, CertificateType};

const TOKEN_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Certificate issuance form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateDraft {
    pub student_id: String,
    pub title: String,
    pub duration: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CertificateType>,
    pub grade: Option<String>,
    /// Left blank to have one generated.
    pub certificate_no: Option<String>,
    pub photo: Option<String>,
}

impl CertificateDraft {
    /// Turn the form into an issued certificate dated `today`.
    ///
    /// Student, title and scan image are all required.
    pub fn issue<R: Rng + ?Sized>(
        self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Certificate, ValidationError> {
        Required::default()
            .text("studentId", &self.student_id)
            .text("title", &self.title)
            .opt_text("photo", self.photo.as_deref())
            .finish()?;

        let certificate_no = match non_blank(self.certificate_no) {
            Some(no) => no,
            None => generate_certificate_no(rng),
        };

        Ok(Certificate {
            id: new_id(),
            certificate_no,
            student_id: self.student_id,
            kind: self.kind.unwrap_or_default(),
            title: self.title.trim().to_string(),
            duration: non_blank(self.duration),
            issue_date: today,
            status: CertificateStatus::Issued,
            grade: non_blank(self.grade).unwrap_or_else(|| DEFAULT_CERTIFICATE_GRADE.to_string()),
            photo: self.photo,
        })
    }
}

/// `CERT-` followed by six upper-case base-36 characters.
pub fn generate_certificate_no<R: Rng + ?Sized>(rng: &mut R) -> String {
    let token: String = (0..CERTIFICATE_TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect();
    format!("{CERTIFICATE_NO_PREFIX}{token}")
}

/// Result entry form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultDraft {
    pub student_id: String,
    pub subject: String,
    pub marks: Option<u32>,
    pub max_marks: Option<u32>,
}

impl ResultDraft {
    pub fn record(self, today: NaiveDate) -> Result<ExamResult, ValidationError> {
        Required::default()
            .text("studentId", &self.student_id)
            .text("subject", &self.subject)
            .finish()?;

        let marks = self.marks.unwrap_or(0);
        Ok(ExamResult {
            id: new_id(),
            student_id: self.student_id,
            subject: self.subject.trim().to_string(),
            marks,
            max_marks: self.max_marks.filter(|m| *m > 0).unwrap_or(DEFAULT_MAX_MARKS),
            grade: grade_for_marks(marks).to_string(),
            date: today,
        })
    }
}

/// Fixed thresholds on raw marks, independent of `max_marks`.
pub fn grade_for_marks(marks: u32) -> &'static str {
    if marks >= GRADE_A_PLUS_MIN_MARKS {
        "A+"
    } else if marks >= GRADE_B_MIN_MARKS {
        "B"
    } else {
        "C"
    }
}

/// Records for one student, in insertion order.
pub fn list_for_student<'a, T: StudentRecord>(items: &'a [T], student_id: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.student_id() == student_id)
        .collect()
}

/// Drop the record with `id`. Returns whether anything was removed.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Drop records whose student no longer exists. Returns how many went.
pub fn remove_orphans<T: StudentRecord>(items: &mut Vec<T>, users: &[User]) -> usize {
    let before = items.len();
    items.retain(|item| users.iter().any(|u| u.id == item.student_id()));
    before - items.len()
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
