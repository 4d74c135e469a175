use registrar_shared::content::{group_by_weekday, SlotDraft};
use registrar_shared::registry::remove_by_id;
use registrar_shared::TimetableSlot;
use tracing::info;

use crate::error::Result;
use crate::state::Portal;

impl Portal {
    pub fn timetable(&self) -> Result<Vec<TimetableSlot>> {
        Ok(self.database().get_timetable()?)
    }

    pub fn add_timetable_slot(&self, draft: SlotDraft) -> Result<TimetableSlot> {
        let slot = draft.build()?;
        let mut all = self.database().get_timetable()?;
        all.push(slot.clone());
        self.database().save_timetable(&all)?;
        info!(day = %slot.day, subject = %slot.subject, "Timetable slot added");
        Ok(slot)
    }

    pub fn delete_timetable_slot(&self, id: &str) -> Result<bool> {
        let mut all = self.database().get_timetable()?;
        if !remove_by_id(&mut all, id) {
            return Ok(false);
        }
        self.database().save_timetable(&all)?;
        Ok(true)
    }

    /// Monday through Saturday, each with its slots in stored order.
    pub fn timetable_by_day(&self) -> Result<Vec<(&'static str, Vec<TimetableSlot>)>> {
        let all = self.database().get_timetable()?;
        Ok(group_by_weekday(&all)
            .into_iter()
            .map(|(day, slots)| (day, slots.into_iter().cloned().collect()))
            .collect())
    }
}
