use crate::config::CONFIG;
use crate::models::{Collection, CollectionForm, UploadFile};
use crate::services::entity_service::{EntityService, Saved};
use crate::services::transport::{MultipartForm, Transport};

pub type CollectionService<T> = EntityService<Collection, T>;

/// Collections carry a single cover, sent under `thumbnail`
pub fn collection_form_data(form: &CollectionForm, thumbnail: Option<UploadFile>) -> MultipartForm {
    let data = MultipartForm::new().text("collectionName", form.collection_name.trim());
    match thumbnail {
        Some(file) => data.file(&CONFIG.uploads.thumbnail, file),
        None => data,
    }
}

impl<T: Transport> EntityService<Collection, T> {
    pub async fn create(&self, form: &CollectionForm, thumbnail: UploadFile) -> Result<Saved<Collection>, String> {
        log::info!("🗂️ Creating collection '{}'", form.collection_name);
        self.create_with(collection_form_data(form, Some(thumbnail))).await
    }

    pub async fn update(
        &self,
        id: &str,
        form: &CollectionForm,
        thumbnail: Option<UploadFile>,
    ) -> Result<Saved<Collection>, String> {
        log::info!("📝 Updating collection {}", id);
        self.update_with(id, collection_form_data(form, thumbnail)).await
    }
}
