use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entity, ImageEntry};

/// Gallery a photo set belongs to: a bare id or the populated document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GalleryRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(rename = "galleryName", default)]
        gallery_name: String,
    },
}

impl GalleryRef {
    pub fn id(&self) -> &str {
        match self {
            GalleryRef::Id(id) => id,
            GalleryRef::Populated { id, .. } => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            GalleryRef::Id(_) => None,
            GalleryRef::Populated { gallery_name, .. } => Some(gallery_name),
        }
    }
}

/// Photo set from the alternate admin section. Overlaps with a gallery's own
/// image sequence but lives in its own slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: String,
    /// Collection name (not id)
    #[serde(default)]
    pub collection: String,
    #[serde(default)]
    pub gallery: Option<GalleryRef>,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Photo {
    pub fn gallery_name(&self) -> Option<&str> {
        self.gallery.as_ref().and_then(GalleryRef::name)
    }
}

impl Entity for Photo {
    const RESOURCE: &'static str = "photos";
    const LABEL: &'static str = "photos";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_populated_gallery() {
        let json = r#"{
            "_id": "p1",
            "collection": "Weddings",
            "gallery": {"_id": "g1", "galleryName": "Haldi Night"},
            "images": [{"url": "https://cdn/1.jpg"}]
        }"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(photo.gallery_name(), Some("Haldi Night"));
        assert_eq!(photo.gallery.as_ref().map(GalleryRef::id), Some("g1"));
    }

    #[test]
    fn decodes_gallery_id_only() {
        let photo: Photo =
            serde_json::from_str(r#"{"_id":"p2","collection":"Weddings","gallery":"g7"}"#).unwrap();
        assert_eq!(photo.gallery_name(), None);
        assert!(photo.images.is_empty());
    }
}
