use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entity, ImageEntry};

/// Owning collection of a gallery: a bare id or the populated document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CollectionRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(rename = "collectionName", default)]
        collection_name: String,
    },
}

impl CollectionRef {
    pub fn id(&self) -> &str {
        match self {
            CollectionRef::Id(id) => id,
            CollectionRef::Populated { id, .. } => id,
        }
    }

    /// Display name, only known when the backend populated the reference
    pub fn name(&self) -> Option<&str> {
        match self {
            CollectionRef::Id(_) => None,
            CollectionRef::Populated { collection_name, .. } => Some(collection_name),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    #[serde(rename = "_id")]
    pub id: String,
    pub gallery_name: String,
    pub collection: Option<CollectionRef>,
    /// Ordered images; a legacy single `thumbnail` becomes a one-element sequence
    pub images: Vec<ImageEntry>,
    pub status: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Gallery {
    pub fn collection_id(&self) -> Option<&str> {
        self.collection.as_ref().map(CollectionRef::id)
    }

    pub fn collection_name(&self) -> Option<&str> {
        self.collection.as_ref().and_then(CollectionRef::name)
    }

    /// First image, used as the card / table thumbnail
    pub fn cover(&self) -> Option<&ImageEntry> {
        self.images.first()
    }
}

impl Entity for Gallery {
    const RESOURCE: &'static str = "gallery";
    const LABEL: &'static str = "gallery";

    fn id(&self) -> &str {
        &self.id
    }
}

// Wire shape: both `images` and the legacy `thumbnail` may appear
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GalleryWire {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    gallery_name: String,
    #[serde(default)]
    collection: Option<CollectionRef>,
    #[serde(default)]
    images: Vec<ImageEntry>,
    #[serde(default)]
    thumbnail: Option<ImageEntry>,
    #[serde(default)]
    status: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<GalleryWire> for Gallery {
    fn from(wire: GalleryWire) -> Self {
        let images = if wire.images.is_empty() {
            wire.thumbnail.into_iter().collect()
        } else {
            if wire.thumbnail.is_some() {
                log::debug!("gallery {} carries both images and thumbnail, keeping images", wire.id);
            }
            wire.images
        };

        Self {
            id: wire.id,
            gallery_name: wire.gallery_name,
            collection: wire.collection,
            images,
            status: wire.status,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

impl<'de> Deserialize<'de> for Gallery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        GalleryWire::deserialize(deserializer).map(Gallery::from)
    }
}
