pub mod entity;
pub mod image;
pub mod gallery;
pub mod collection;
pub mod photo;
pub mod envelope;
pub mod forms;
pub mod upload;

pub use entity::{display_label, Entity};
pub use image::ImageEntry;
pub use gallery::{CollectionRef, Gallery};
pub use collection::Collection;
pub use photo::{GalleryRef, Photo};
pub use envelope::ResponseEnvelope;
pub use forms::{CollectionForm, GalleryForm, PhotoForm, ValidationError};
pub use upload::UploadFile;
