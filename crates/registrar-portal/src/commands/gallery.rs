use registrar_shared::content::GalleryDraft;
use registrar_shared::registry::remove_by_id;
use registrar_shared::GalleryItem;
use tracing::info;

use crate::error::Result;
use crate::seed;
use crate::state::Portal;

impl Portal {
    pub fn gallery(&self) -> Result<Vec<GalleryItem>> {
        Ok(self.database().get_gallery()?)
    }

    /// What visitors see: the stored gallery, or the demo pictures while it
    /// is empty. The demo items are never saved.
    pub fn public_gallery(&self) -> Result<Vec<GalleryItem>> {
        let items = self.gallery()?;
        if items.is_empty() {
            return Ok(seed::demo_gallery());
        }
        Ok(items)
    }

    pub fn add_gallery_item(&self, draft: GalleryDraft) -> Result<GalleryItem> {
        let item = draft.build()?;
        let mut all = self.database().get_gallery()?;
        all.push(item.clone());
        self.database().save_gallery(&all)?;
        info!(item_id = %item.id, kind = item.kind.as_str(), "Gallery item added");
        Ok(item)
    }

    pub fn delete_gallery_item(&self, id: &str) -> Result<bool> {
        let mut all = self.database().get_gallery()?;
        if !remove_by_id(&mut all, id) {
            return Ok(false);
        }
        self.database().save_gallery(&all)?;
        Ok(true)
    }
}
