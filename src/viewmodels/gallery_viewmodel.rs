// ============================================================================
// GALLERY VIEWMODEL - Gallery forms, list table and status toggle
// ============================================================================

use crate::models::{Gallery, GalleryForm, ValidationError};
use crate::services::preview::PreviewProvider;
use crate::services::transport::Transport;
use crate::state::selectors::search_galleries;
use crate::state::UploadStaging;
use crate::viewmodels::entity_viewmodel::{EntityViewModel, SubmitError};

pub type GalleryViewModel<T> = EntityViewModel<Gallery, T>;

/// One line of the admin gallery table
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryRow {
    pub id: String,
    pub name: String,
    pub collection_name: String,
    pub status: bool,
    pub status_label: &'static str,
    pub cover_url: Option<String>,
    pub image_count: usize,
}

impl From<&Gallery> for GalleryRow {
    fn from(gallery: &Gallery) -> Self {
        Self {
            id: gallery.id.clone(),
            name: gallery.gallery_name.clone(),
            collection_name: gallery.collection_name().unwrap_or("—").to_string(),
            status: gallery.status,
            status_label: if gallery.status { "Active" } else { "Inactive" },
            cover_url: gallery.cover().map(|image| image.url.clone()),
            image_count: gallery.images.len(),
        }
    }
}

impl<T: Transport> EntityViewModel<Gallery, T> {
    /// Create form submit. Needs at least one staged image; on success the
    /// staging list is emptied for the next entry.
    pub async fn create<P: PreviewProvider>(
        &self,
        form: &GalleryForm,
        staging: &mut UploadStaging<P>,
    ) -> Result<Gallery, SubmitError> {
        form.validate()?;
        let files = staging.to_submission_list();
        if files.is_empty() {
            return Err(ValidationError::NoImages.into());
        }

        let created = self.run_create(self.service().create(form, files)).await?;
        staging.reset();
        Ok(created)
    }

    /// Edit form submit. Zero new images is fine: existing ones stay.
    pub async fn update<P: PreviewProvider>(
        &self,
        id: &str,
        form: &GalleryForm,
        staging: &UploadStaging<P>,
    ) -> Result<Gallery, SubmitError> {
        form.validate()?;
        let new_files = staging.to_submission_list();
        self.run_update(self.service().update(id, form, new_files)).await
    }

    /// List-screen switch: flip to the opposite of `current`, then refetch
    /// the table whatever the outcome.
    pub async fn toggle_and_refresh(&self, id: &str, current: bool) -> Result<Gallery, String> {
        let toggled = self.toggle_status(id, Some(!current)).await;
        if let Err(e) = self.list_all().await {
            log::warn!("⚠️ Refresh after status toggle failed: {}", e);
        }
        toggled
    }

    pub fn rows(&self, query: &str) -> Vec<GalleryRow> {
        self.store()
            .with(|state| search_galleries(&state.items, query).into_iter().map(GalleryRow::from).collect())
    }
}
