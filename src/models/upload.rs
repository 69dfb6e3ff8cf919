/// File selected in a form, ready to be attached to a multipart request
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub size: u64,
    raw: Option<web_sys::File>,
}

impl UploadFile {
    /// Wrap a file picked through an `<input type="file">`
    pub fn from_web_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            content_type: file.type_(),
            size: file.size() as u64,
            raw: Some(file),
        }
    }

    /// File description without browser backing (no readable bytes)
    pub fn detached(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
            raw: None,
        }
    }

    /// Every file of an input's `FileList`, in selection order
    pub fn from_file_list(list: &web_sys::FileList) -> Vec<Self> {
        (0..list.length())
            .filter_map(|index| list.get(index))
            .map(Self::from_web_file)
            .collect()
    }

    pub fn web_file(&self) -> Option<&web_sys::File> {
        self.raw.as_ref()
    }
}
