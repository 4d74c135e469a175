use registrar_shared::InstituteSettings;

use crate::database::Database;
use crate::error::Result;
use crate::slots::Slot;

impl Database {
    /// Stored institute settings, or `None` if never saved.
    pub fn get_settings(&self) -> Result<Option<InstituteSettings>> {
        self.load_document(Slot::Settings)
    }

    /// Replace the settings wholesale.
    pub fn save_settings(&self, settings: &InstituteSettings) -> Result<()> {
        self.store_document(Slot::Settings, settings)
    }
}
