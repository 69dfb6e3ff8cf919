// ============================================================================
// PREVIEW - Local display handles for files that are not uploaded yet
// ============================================================================

use crate::models::UploadFile;

/// Transient, revocable reference used to display a local file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Creates and releases preview handles. Every handle returned by
/// `create_preview` must be passed to `release_preview` exactly once.
pub trait PreviewProvider {
    fn create_preview(&self, file: &UploadFile) -> Result<PreviewHandle, String>;
    fn release_preview(&self, handle: &PreviewHandle);
}

/// `URL.createObjectURL` / `URL.revokeObjectURL`
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUrlPreviews;

impl PreviewProvider for ObjectUrlPreviews {
    fn create_preview(&self, file: &UploadFile) -> Result<PreviewHandle, String> {
        let raw = file
            .web_file()
            .ok_or_else(|| format!("{} has no browser source", file.name))?;
        web_sys::Url::create_object_url_with_blob(raw)
            .map(PreviewHandle::new)
            .map_err(|e| format!("createObjectURL failed: {:?}", e))
    }

    fn release_preview(&self, handle: &PreviewHandle) {
        if let Err(e) = web_sys::Url::revoke_object_url(handle.as_str()) {
            log::warn!("⚠️ revokeObjectURL failed for {}: {:?}", handle.as_str(), e);
        }
    }
}
