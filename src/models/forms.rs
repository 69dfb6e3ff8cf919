// ============================================================================
// FORMS - Admin form fields and required-field checks
// ============================================================================
// Validation runs before any request is dispatched; a failure never reaches
// the store.
// ============================================================================

use thiserror::Error;

/// Client-side validation failure, shown immediately by the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("At least one image is required")]
    NoImages,
    #[error("Only {max} image(s) allowed")]
    TooManyImages { max: usize },
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryForm {
    pub gallery_name: String,
    pub collection_id: String,
}

impl GalleryForm {
    pub fn new(gallery_name: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            gallery_name: gallery_name.into(),
            collection_id: collection_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.gallery_name, "Gallery name")?;
        require(&self.collection_id, "Collection")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionForm {
    pub collection_name: String,
}

impl CollectionForm {
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self { collection_name: collection_name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.collection_name, "Collection name")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoForm {
    /// Collection name, as the photos backend stores it
    pub collection: String,
    pub gallery_id: String,
}

impl PhotoForm {
    pub fn new(collection: impl Into<String>, gallery_id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            gallery_id: gallery_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.collection, "Collection")?;
        require(&self.gallery_id, "Gallery")
    }
}
