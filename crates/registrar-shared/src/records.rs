//! Persisted record shapes.
//!
//! Every struct serializes with camelCase keys so a stored blob reads the
//! same whichever layer wrote it. Collections are always persisted whole.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{CertificateStatus, CertificateType, MediaKind, Role};

/// Anything stored in a collection and addressed by `id`.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A record that points at a student through a weak `studentId` reference.
///
/// The reference is a lookup key only: nothing guarantees the student still
/// exists, and deleting a student never removes these records.
pub trait StudentRecord: Identified {
    fn student_id(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),+ $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

identified!(
    User,
    PaymentRecord,
    Certificate,
    ExamResult,
    TimetableSlot,
    Event,
    GalleryItem,
    QuizQuestion,
);

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A student or administrator account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub roll_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Stored and compared in plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Program or cohort label, e.g. `CIT`.
    pub class: String,
    pub role: Role,
    /// Current attendance percentage (students only).
    #[serde(default)]
    pub attendance: u8,
    /// Display-only trend; never derived from `attendance`.
    #[serde(default)]
    pub attendance_history: Vec<AttendanceRecord>,
    #[serde(flatten)]
    pub profile: EnrollmentProfile,
    #[serde(default)]
    pub total_fee: i64,
    /// Always equal to the sum of `payment_history` amounts.
    #[serde(default)]
    pub paid_fee: i64,
    #[serde(default)]
    pub payment_history: Vec<PaymentRecord>,
}

impl User {
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether `identifier` is this user's roll number or username.
    pub fn answers_to(&self, identifier: &str) -> bool {
        self.roll_no == identifier || self.username.as_deref() == Some(identifier)
    }

    /// Admin search box: case-insensitive name match or roll-number substring.
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.roll_no.contains(term)
    }
}

/// Optional enrollment metadata captured on the admission form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Opaque image data (usually a data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub month: String,
    pub percentage: u8,
}

/// One ledger entry. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRecord {
    pub id: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub method: String,
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub certificate_no: String,
    pub student_id: String,
    #[serde(rename = "type")]
    pub kind: CertificateType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub issue_date: NaiveDate,
    pub status: CertificateStatus,
    pub grade: String,
    /// Scanned certificate image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl StudentRecord for Certificate {
    fn student_id(&self) -> &str {
        &self.student_id
    }
}

/// One exam or subject score. `grade` is a snapshot taken at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: String,
    pub student_id: String,
    pub subject: String,
    pub marks: u32,
    pub max_marks: u32,
    pub grade: String,
    pub date: NaiveDate,
}

impl StudentRecord for ExamResult {
    fn student_id(&self) -> &str {
        &self.student_id
    }
}

/// Times are display strings (`08:30 AM`); no overlap checks are made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlot {
    pub id: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_answer == option
    }
}

/// Institute branding and contact details. Saved wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstituteSettings {
    pub about_text: String,
    pub mission: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}
