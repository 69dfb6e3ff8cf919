use crate::config::CONFIG;
use crate::models::{Photo, PhotoForm, UploadFile};
use crate::services::entity_service::{EntityService, Saved};
use crate::services::transport::{MultipartForm, Transport};

pub type PhotoService<T> = EntityService<Photo, T>;

pub fn photo_form_data(form: &PhotoForm, files: Vec<UploadFile>) -> MultipartForm {
    MultipartForm::new()
        .text("collection", form.collection.trim())
        .text("gallery", form.gallery_id.trim())
        .files(&CONFIG.uploads.images, files)
}

impl<T: Transport> EntityService<Photo, T> {
    pub async fn create(&self, form: &PhotoForm, files: Vec<UploadFile>) -> Result<Saved<Photo>, String> {
        log::info!("📷 Uploading {} photo(s) to gallery {}", files.len(), form.gallery_id);
        self.create_with(photo_form_data(form, files)).await
    }

    pub async fn update(&self, id: &str, form: &PhotoForm, new_files: Vec<UploadFile>) -> Result<Saved<Photo>, String> {
        log::info!("📝 Updating photos {} (+{} image(s))", id, new_files.len());
        self.update_with(id, photo_form_data(form, new_files)).await
    }
}
