use crate::constants::{ATTENDANCE_PASS_THRESHOLD, ENROLLMENT_ATTENDANCE_MONTH};
use crate::error::ValidationError;
use crate::records::{AttendanceRecord, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStanding {
    Satisfactory,
    Short,
}

/// Overwrite the current attendance percentage.
///
/// `attendance_history` is left alone; it is a seeded trend for charts.
pub fn set_attendance(user: &User, percentage: u8) -> Result<User, ValidationError> {
    if percentage > 100 {
        return Err(ValidationError::invalid(
            "attendance",
            format!("Attendance must be between 0 and 100, got {percentage}"),
        ));
    }
    let mut updated = user.clone();
    updated.attendance = percentage;
    Ok(updated)
}

pub fn standing(user: &User) -> AttendanceStanding {
    if user.attendance >= ATTENDANCE_PASS_THRESHOLD {
        AttendanceStanding::Satisfactory
    } else {
        AttendanceStanding::Short
    }
}

pub fn is_passing(user: &User) -> bool {
    standing(user) == AttendanceStanding::Satisfactory
}

/// History every new enrollment starts with.
pub fn enrollment_history() -> Vec<AttendanceRecord> {
    vec![AttendanceRecord {
        month: ENROLLMENT_ATTENDANCE_MONTH.to_string(),
        percentage: 0,
    }]
}
