//! Demo institute used to fill an empty store.

use chrono::NaiveDate;
use registrar_shared::{
    AttendanceRecord, EnrollmentProfile, Event, GalleryItem, InstituteSettings, MediaKind,
    PaymentRecord, Role, TimetableSlot, User,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn history(points: [(&str, u8); 3]) -> Vec<AttendanceRecord> {
    points
        .iter()
        .map(|(month, percentage)| AttendanceRecord {
            month: month.to_string(),
            percentage: *percentage,
        })
        .collect()
}

fn payment(id: &str, amount: i64, date: NaiveDate, method: &str) -> PaymentRecord {
    PaymentRecord {
        id: id.into(),
        amount,
        date,
        method: method.into(),
    }
}

/// Two students with paid fees that match their payment history, plus the
/// administrator account.
pub fn demo_users() -> Vec<User> {
    let ahmed_payments = vec![
        payment("p1", 10_000, date(2024, 1, 10), "Bank Transfer"),
        payment("p2", 5_000, date(2024, 2, 15), "Cash"),
    ];
    let sara_payments = vec![payment("p3", 45_000, date(2024, 1, 5), "Scholarship/Full")];

    vec![
        User {
            id: "1".into(),
            name: "Ahmed Khan".into(),
            roll_no: "NTZ-2024-001".into(),
            username: Some("ahmed".into()),
            password: Some("password123".into()),
            class: "CIT".into(),
            role: Role::Student,
            attendance: 85,
            attendance_history: history([("Jan", 80), ("Feb", 90), ("Mar", 85)]),
            profile: EnrollmentProfile {
                father_name: Some("Gul Khan".into()),
                cnic: Some("54401-1234567-1".into()),
                age: Some("21".into()),
                gender: Some("Male".into()),
                nationality: Some("Pakistani".into()),
                religion: Some("Islam".into()),
                address: Some("Block A, Civil Lines, Zhob".into()),
                reference: Some("Direct Admission".into()),
                photo: None,
            },
            total_fee: 25_000,
            paid_fee: ahmed_payments.iter().map(|p| p.amount).sum(),
            payment_history: ahmed_payments,
        },
        User {
            id: "2".into(),
            name: "Sara Gul".into(),
            roll_no: "NTZ-2024-002".into(),
            username: Some("sara".into()),
            password: Some("password123".into()),
            class: "DIT".into(),
            role: Role::Student,
            attendance: 72,
            attendance_history: history([("Jan", 70), ("Feb", 75), ("Mar", 72)]),
            profile: EnrollmentProfile {
                father_name: Some("Abdullah Jan".into()),
                cnic: Some("54401-7654321-2".into()),
                age: Some("19".into()),
                gender: Some("Female".into()),
                nationality: Some("Pakistani".into()),
                religion: Some("Islam".into()),
                address: Some("Near Main Mosque, Zhob".into()),
                reference: Some("Alumni Ref".into()),
                photo: None,
            },
            total_fee: 45_000,
            paid_fee: sara_payments.iter().map(|p| p.amount).sum(),
            payment_history: sara_payments,
        },
        User {
            id: "admin".into(),
            name: "Registrar Zhob".into(),
            roll_no: "NTIZB143".into(),
            username: Some("admin".into()),
            password: Some("NTIZB143".into()),
            class: "Administration".into(),
            role: Role::Admin,
            attendance: 0,
            attendance_history: Vec::new(),
            profile: EnrollmentProfile::default(),
            total_fee: 0,
            paid_fee: 0,
            payment_history: Vec::new(),
        },
    ]
}

pub fn demo_timetable() -> Vec<TimetableSlot> {
    [
        ("t1", "Monday", "08:30 AM", "10:00 AM", "IT Fundamentals"),
        ("t2", "Monday", "10:00 AM", "11:30 AM", "Software Engineering"),
        ("t3", "Tuesday", "08:30 AM", "10:30 AM", "Web Development"),
    ]
    .into_iter()
    .map(|(id, day, start, end, subject)| TimetableSlot {
        id: id.into(),
        day: day.into(),
        start_time: start.into(),
        end_time: end.into(),
        subject: subject.into(),
    })
    .collect()
}

pub fn demo_events() -> Vec<Event> {
    [
        (
            "e1",
            "Zhob Tech Summit 2024",
            date(2024, 5, 15),
            "Annual technology showcase and networking event.",
        ),
        (
            "e2",
            "Spring Graduation",
            date(2024, 6, 1),
            "Ceremony for CIT and DIT graduates.",
        ),
        (
            "e3",
            "TTB Assessment Week",
            date(2024, 6, 20),
            "Official trade testing for certification.",
        ),
    ]
    .into_iter()
    .map(|(id, title, date, description)| Event {
        id: id.into(),
        title: title.into(),
        date,
        description: description.into(),
        image_url: None,
    })
    .collect()
}

pub fn demo_gallery() -> Vec<GalleryItem> {
    [
        ("g1", "photo-1517245386807-bb43f82c33c4", "Modern Lab Session"),
        ("g2", "photo-1522202176988-66273c2fd55f", "Collaboration Workshop"),
        ("g3", "photo-1531482615713-2afd69097998", "Coding Bootcamp"),
    ]
    .into_iter()
    .map(|(id, photo, title)| GalleryItem {
        id: id.into(),
        url: format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=800"),
        kind: MediaKind::Image,
        title: title.into(),
    })
    .collect()
}

/// Settings shown when none have been saved.
pub fn default_settings() -> InstituteSettings {
    InstituteSettings {
        about_text: "NewTech Institute Zhob stands as a beacon of technical excellence in the \
                     region. Founded with the mission to bridge the digital divide, we provide \
                     world-class vocational training in Information Technology, Software \
                     Development, and Graphic Design."
            .into(),
        mission: "To equip the youth of Zhob with market-ready technical skills that foster \
                  economic independence."
            .into(),
        location: "Main Bazar Road, Near Post Office, Zhob, Balochistan".into(),
        phone: "+92 822 412345".into(),
        email: "admissions@newtechzhob.edu.pk".into(),
        logo_url: None,
    }
}
