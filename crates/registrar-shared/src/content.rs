//! Timetable, announcement, gallery and quiz-bank entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SLOT_END_TIME, QUIZ_OPTION_COUNT, WEEKDAYS};
use crate::error::{Required, ValidationError};
use crate::records::{Event, GalleryItem, QuizQuestion, TimetableSlot};
use crate::registry::non_blank;
use crate::types::{new_id, MediaKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotDraft {
    pub day: Option<String>,
    pub subject: String,
    pub start_time: String,
    pub end_time: Option<String>,
}

impl SlotDraft {
    pub fn build(self) -> Result<TimetableSlot, ValidationError> {
        Required::default()
            .text("subject", &self.subject)
            .text("startTime", &self.start_time)
            .finish()?;

        let day = non_blank(self.day).unwrap_or_else(|| WEEKDAYS[0].to_string());
        if !WEEKDAYS.contains(&day.as_str()) {
            return Err(ValidationError::invalid(
                "day",
                format!("Unknown teaching day: {day}"),
            ));
        }

        Ok(TimetableSlot {
            id: new_id(),
            day,
            start_time: self.start_time.trim().to_string(),
            end_time: non_blank(self.end_time).unwrap_or_else(|| DEFAULT_SLOT_END_TIME.to_string()),
            subject: self.subject.trim().to_string(),
        })
    }
}

/// Slots grouped Monday through Saturday, each day in insertion order.
/// Days without slots are still listed.
pub fn group_by_weekday(slots: &[TimetableSlot]) -> Vec<(&'static str, Vec<&TimetableSlot>)> {
    WEEKDAYS
        .iter()
        .map(|day| (*day, slots.iter().filter(|s| s.day == *day).collect()))
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

impl EventDraft {
    pub fn build(self, today: NaiveDate) -> Result<Event, ValidationError> {
        Required::default()
            .text("title", &self.title)
            .text("description", &self.description)
            .finish()?;

        Ok(Event {
            id: new_id(),
            title: self.title.trim().to_string(),
            date: self.date.unwrap_or(today),
            description: self.description.trim().to_string(),
            image_url: non_blank(self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryDraft {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: Option<MediaKind>,
}

impl GalleryDraft {
    pub fn build(self) -> Result<GalleryItem, ValidationError> {
        Required::default()
            .text("title", &self.title)
            .text("url", &self.url)
            .finish()?;

        Ok(GalleryItem {
            id: new_id(),
            url: self.url,
            kind: self.kind.unwrap_or_default(),
            title: self.title.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl QuestionDraft {
    /// Needs the question text and exactly four filled-in options.
    pub fn build(self) -> Result<QuizQuestion, ValidationError> {
        Required::default().text("question", &self.question).finish()?;

        if self.options.len() != QUIZ_OPTION_COUNT
            || self.options.iter().any(|o| o.trim().is_empty())
        {
            return Err(ValidationError::invalid(
                "options",
                format!("All {QUIZ_OPTION_COUNT} options are required"),
            ));
        }
        if self.correct_answer >= self.options.len() {
            return Err(ValidationError::invalid(
                "correctAnswer",
                format!("Answer index {} is out of range", self.correct_answer),
            ));
        }

        Ok(QuizQuestion {
            id: new_id(),
            question: self.question.trim().to_string(),
            options: self.options.into_iter().map(|o| o.trim().to_string()).collect(),
            correct_answer: self.correct_answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: &str, subject: &str) -> TimetableSlot {
        SlotDraft {
            day: Some(day.into()),
            subject: subject.into(),
            start_time: "08:30 AM".into(),
            end_time: Some("10:00 AM".into()),
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_slot_defaults() {
        let s = SlotDraft {
            subject: "IT Fundamentals".into(),
            start_time: "08:00 AM".into(),
            ..Default::default()
        }
        .build()
        .unwrap();

        assert_eq!(s.day, "Monday");
        assert_eq!(s.end_time, "12:00 PM");
    }

    #[test]
    fn test_slot_rejects_unknown_day() {
        let err = SlotDraft {
            day: Some("Sunday".into()),
            subject: "Typing".into(),
            start_time: "09:00 AM".into(),
            end_time: None,
        }
        .build()
        .unwrap_err();
        assert!(err.mentions("day"));
    }

    #[test]
    fn test_slot_requires_subject_and_start() {
        let err = SlotDraft::default().build().unwrap_err();
        assert_eq!(err.fields, vec!["subject", "startTime"]);
    }

    #[test]
    fn test_group_by_weekday() {
        let slots = vec![
            slot("Tuesday", "Web Development"),
            slot("Monday", "IT Fundamentals"),
            slot("Monday", "Software Engineering"),
        ];
        let grouped = group_by_weekday(&slots);

        assert_eq!(grouped.len(), 6);
        assert_eq!(grouped[0].0, "Monday");
        assert_eq!(grouped[0].1.len(), 2);
        assert_eq!(grouped[0].1[0].subject, "IT Fundamentals");
        assert_eq!(grouped[1].1.len(), 1);
        assert!(grouped[5].1.is_empty());
    }

    #[test]
    fn test_event_date_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let ev = EventDraft {
            title: "Tech Summit".into(),
            description: "Annual showcase".into(),
            ..Default::default()
        }
        .build(today)
        .unwrap();
        assert_eq!(ev.date, today);

        let err = EventDraft::default().build(today).unwrap_err();
        assert_eq!(err.fields, vec!["title", "description"]);
    }

    #[test]
    fn test_gallery_defaults_to_image() {
        let item = GalleryDraft {
            title: "Lab Session".into(),
            url: "https://example.org/lab.jpg".into(),
            kind: None,
        }
        .build()
        .unwrap();
        assert_eq!(item.kind, MediaKind::Image);
        assert!(GalleryDraft::default().build().is_err());
    }

    #[test]
    fn test_question_needs_four_options() {
        let mut draft = QuestionDraft {
            question: "What does CPU stand for?".into(),
            options: vec![
                "Central Processing Unit".into(),
                "Computer Personal Unit".into(),
                "Central Program Utility".into(),
                "".into(),
            ],
            correct_answer: 0,
        };
        assert!(draft.clone().build().unwrap_err().mentions("options"));

        draft.options[3] = "Core Power Unit".into();
        let q = draft.clone().build().unwrap();
        assert!(q.is_correct(0));

        draft.correct_answer = 4;
        assert!(draft.build().unwrap_err().mentions("correctAnswer"));
    }
}
