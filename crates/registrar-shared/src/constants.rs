/// Application name
pub const APP_NAME: &str = "Registrar";

/// Default prefix for every persisted slot key
pub const STORAGE_NAMESPACE: &str = "sms_";

/// Default storage quota in bytes (5 MiB, the usual browser local storage budget)
pub const DEFAULT_STORAGE_QUOTA: usize = 5 * 1024 * 1024;

/// Maximum size of an uploaded photo, scan or gallery file (5 MiB)
pub const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Roll numbers are `NTZ-` followed by four digits
pub const ROLL_NO_PREFIX: &str = "NTZ-";

/// Auto-generated certificate numbers are `CERT-` followed by a random token
pub const CERTIFICATE_NO_PREFIX: &str = "CERT-";

/// Length of the random certificate token
pub const CERTIFICATE_TOKEN_LEN: usize = 6;

/// Fee assigned to a new enrollment when the form leaves it blank
pub const DEFAULT_TOTAL_FEE: i64 = 30_000;

/// Month label of the single attendance entry seeded at enrollment
pub const ENROLLMENT_ATTENDANCE_MONTH: &str = "Reg";

/// Presentation cutoff for attendance; nothing is blocked below it
pub const ATTENDANCE_PASS_THRESHOLD: u8 = 75;

/// Result grade boundaries on raw marks
pub const GRADE_A_PLUS_MIN_MARKS: u32 = 80;
pub const GRADE_B_MIN_MARKS: u32 = 60;

/// Default maximum marks for a result entry
pub const DEFAULT_MAX_MARKS: u32 = 100;

/// Default grade printed on a certificate
pub const DEFAULT_CERTIFICATE_GRADE: &str = "A";

/// Teaching days, in display order
pub const WEEKDAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// End time used when a timetable slot is saved without one
pub const DEFAULT_SLOT_END_TIME: &str = "12:00 PM";

/// Every quiz question carries exactly this many options
pub const QUIZ_OPTION_COUNT: usize = 4;

/// Payment method used by the admin cash-entry desk
pub const CASH_METHOD: &str = "Cash";

/// Reference paragraph for the typing trainer
pub const TYPING_PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog. Programming is the art of algorithm design and implementation. Speed and accuracy are vital for computer operators in the modern information age. Proper finger placement on the keyboard significantly improves your typing words per minute.";

/// Characters counted as one word for WPM
pub const CHARS_PER_WORD: f64 = 5.0;

/// Elapsed time is never taken as less than this when computing WPM
pub const MIN_ELAPSED_MS: i64 = 1_000;
