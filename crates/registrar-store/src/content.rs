//! Announcements, timetable, gallery and quiz-bank collections.

use registrar_shared::{Event, GalleryItem, QuizQuestion, TimetableSlot};

use crate::database::Database;
use crate::error::Result;
use crate::slots::Slot;

impl Database {
    pub fn get_events(&self) -> Result<Vec<Event>> {
        self.load_list(Slot::Events)
    }

    pub fn save_events(&self, events: &[Event]) -> Result<()> {
        self.store_document(Slot::Events, events)
    }

    pub fn get_timetable(&self) -> Result<Vec<TimetableSlot>> {
        self.load_list(Slot::Timetable)
    }

    pub fn save_timetable(&self, slots: &[TimetableSlot]) -> Result<()> {
        self.store_document(Slot::Timetable, slots)
    }

    pub fn get_gallery(&self) -> Result<Vec<GalleryItem>> {
        self.load_list(Slot::Gallery)
    }

    pub fn save_gallery(&self, items: &[GalleryItem]) -> Result<()> {
        self.store_document(Slot::Gallery, items)
    }

    pub fn get_quiz(&self) -> Result<Vec<QuizQuestion>> {
        self.load_list(Slot::Quiz)
    }

    pub fn save_quiz(&self, questions: &[QuizQuestion]) -> Result<()> {
        self.store_document(Slot::Quiz, questions)
    }
}
