use registrar_shared::content::EventDraft;
use registrar_shared::registry::remove_by_id;
use registrar_shared::Event;
use tracing::info;

use crate::error::Result;
use crate::state::Portal;

impl Portal {
    pub fn events(&self) -> Result<Vec<Event>> {
        Ok(self.database().get_events()?)
    }

    /// Publish an announcement. Undated drafts are dated today.
    pub fn add_event(&self, draft: EventDraft) -> Result<Event> {
        let event = draft.build(Self::today())?;
        let mut all = self.database().get_events()?;
        all.push(event.clone());
        self.database().save_events(&all)?;
        info!(event_id = %event.id, title = %event.title, "Event published");
        Ok(event)
    }

    pub fn delete_event(&self, id: &str) -> Result<bool> {
        let mut all = self.database().get_events()?;
        if !remove_by_id(&mut all, id) {
            return Ok(false);
        }
        self.database().save_events(&all)?;
        Ok(true)
    }
}
