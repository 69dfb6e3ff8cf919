// ============================================================================
// SELECTORS - Derived views over slice state
// ============================================================================

use crate::models::{Entity, Gallery, Photo};
use crate::state::slice::SliceState;

/// State of a single-entity screen (view/edit pages)
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a, E> {
    Loading,
    Found(&'a E),
    /// Nothing selected for that id: deleted or never existed
    NotFound,
    Failed(&'a str),
}

impl<E: Entity> SliceState<E> {
    /// Screen state for entity `id`. A stale selection of another entity is
    /// not shown.
    pub fn detail_view(&self, id: &str) -> DetailView<'_, E> {
        if self.loading {
            return DetailView::Loading;
        }
        match (&self.selected, &self.error) {
            (Some(selected), _) if selected.id() == id => DetailView::Found(selected),
            (_, Some(error)) => DetailView::Failed(error),
            _ => DetailView::NotFound,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Admin gallery table search (by gallery name)
pub fn search_galleries<'a>(galleries: &'a [Gallery], query: &str) -> Vec<&'a Gallery> {
    let query = query.trim();
    galleries
        .iter()
        .filter(|gallery| contains_ignore_case(&gallery.gallery_name, query))
        .collect()
}

/// Galleries that belong to `collection_id`
pub fn galleries_in_collection<'a>(galleries: &'a [Gallery], collection_id: &str) -> Vec<&'a Gallery> {
    galleries
        .iter()
        .filter(|gallery| gallery.collection_id() == Some(collection_id))
        .collect()
}

/// Galleries shown on the public site
pub fn active_galleries(galleries: &[Gallery]) -> Vec<&Gallery> {
    galleries.iter().filter(|gallery| gallery.status).collect()
}

/// Filters of the photos admin table. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoFilter {
    pub collection: Option<String>,
    pub gallery_name: Option<String>,
    pub search: String,
}

impl PhotoFilter {
    pub fn matches(&self, photo: &Photo) -> bool {
        let collection_ok = self
            .collection
            .as_deref()
            .map_or(true, |collection| photo.collection == collection);
        let gallery_ok = self
            .gallery_name
            .as_deref()
            .map_or(true, |name| photo.gallery_name() == Some(name));

        let search = self.search.trim();
        let search_ok = search.is_empty()
            || photo.gallery_name().map_or(false, |name| contains_ignore_case(name, search))
            || contains_ignore_case(&photo.collection, search);

        collection_ok && gallery_ok && search_ok
    }

    pub fn apply<'a>(&self, photos: &'a [Photo]) -> Vec<&'a Photo> {
        photos.iter().filter(|photo| self.matches(photo)).collect()
    }
}
