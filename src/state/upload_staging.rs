// ============================================================================
// UPLOAD STAGING - Form-local image list (existing + newly selected)
// ============================================================================
// Never shared, never written to a slice. Each local entry owns one preview
// handle, released on removal, on reset, or when the form is dropped.
// ============================================================================

use crate::models::{ImageEntry, UploadFile};
use crate::services::preview::{PreviewHandle, PreviewProvider};

#[derive(Debug, Clone)]
pub enum StagingEntry {
    /// Already on the server; shown from its URL, never re-uploaded
    Existing(ImageEntry),
    /// Picked in this form; uploaded on submit
    Local { file: UploadFile, preview: PreviewHandle },
}

impl StagingEntry {
    pub fn is_existing(&self) -> bool {
        matches!(self, StagingEntry::Existing(_))
    }

    /// What an `<img src>` should point at
    pub fn display_url(&self) -> &str {
        match self {
            StagingEntry::Existing(image) => &image.url,
            StagingEntry::Local { preview, .. } => preview.as_str(),
        }
    }

    pub fn file(&self) -> Option<&UploadFile> {
        match self {
            StagingEntry::Existing(_) => None,
            StagingEntry::Local { file, .. } => Some(file),
        }
    }
}

pub struct UploadStaging<P: PreviewProvider> {
    previews: P,
    entries: Vec<StagingEntry>,
}

impl<P: PreviewProvider> UploadStaging<P> {
    pub fn new(previews: P) -> Self {
        Self {
            previews,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[StagingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that will be uploaded
    pub fn new_file_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_existing()).count()
    }

    /// Appends the files in selection order. A file whose preview cannot be
    /// created is skipped and reported; the others are still staged.
    pub fn add_files(&mut self, files: Vec<UploadFile>) -> Result<(), String> {
        let mut failures = Vec::new();
        for file in files {
            match self.previews.create_preview(&file) {
                Ok(preview) => self.entries.push(StagingEntry::Local { file, preview }),
                Err(e) => {
                    log::warn!("⚠️ No preview for {}: {}", file.name, e);
                    failures.push(file.name);
                }
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(format!("Could not preview: {}", failures.join(", ")))
        }
    }

    /// Removes the entry at `index`, releasing its preview if it has one.
    /// Out-of-range indexes are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<StagingEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        if let StagingEntry::Local { preview, .. } = &entry {
            self.previews.release_preview(preview);
        }
        Some(entry)
    }

    /// New files only, in staging order
    pub fn to_submission_list(&self) -> Vec<UploadFile> {
        self.entries
            .iter()
            .filter_map(StagingEntry::file)
            .cloned()
            .collect()
    }

    /// Replaces the staging list with the server's images (edit form load)
    pub fn seed_from_server(&mut self, images: &[ImageEntry]) {
        self.release_all();
        self.entries = images.iter().cloned().map(StagingEntry::Existing).collect();
    }

    /// Empties the list (after a successful create), releasing previews
    pub fn reset(&mut self) {
        self.release_all();
    }

    fn release_all(&mut self) {
        for entry in self.entries.drain(..) {
            if let StagingEntry::Local { preview, .. } = entry {
                self.previews.release_preview(&preview);
            }
        }
    }
}

impl<P: PreviewProvider> Drop for UploadStaging<P> {
    fn drop(&mut self) {
        self.release_all();
    }
}
