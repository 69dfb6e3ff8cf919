use crate::config::CONFIG;
use crate::models::{Gallery, GalleryForm, UploadFile};
use crate::services::entity_service::{EntityService, Saved};
use crate::services::transport::{MultipartForm, Transport};

pub type GalleryService<T> = EntityService<Gallery, T>;

/// Gallery fields plus every file under the shared `images` field
pub fn gallery_form_data(form: &GalleryForm, files: Vec<UploadFile>) -> MultipartForm {
    MultipartForm::new()
        .text("galleryName", form.gallery_name.trim())
        .text("collection", form.collection_id.trim())
        .files(&CONFIG.uploads.images, files)
}

impl<T: Transport> EntityService<Gallery, T> {
    pub async fn create(&self, form: &GalleryForm, files: Vec<UploadFile>) -> Result<Saved<Gallery>, String> {
        log::info!("🖼️ Creating gallery '{}' with {} image(s)", form.gallery_name, files.len());
        self.create_with(gallery_form_data(form, files)).await
    }

    /// Existing images are kept server-side; only `new_files` are uploaded
    pub async fn update(
        &self,
        id: &str,
        form: &GalleryForm,
        new_files: Vec<UploadFile>,
    ) -> Result<Saved<Gallery>, String> {
        log::info!("📝 Updating gallery {} (+{} image(s))", id, new_files.len());
        self.update_with(id, gallery_form_data(form, new_files)).await
    }
}
