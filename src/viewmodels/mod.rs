pub mod entity_viewmodel;
pub mod gallery_viewmodel;
pub mod collection_viewmodel;
pub mod photo_viewmodel;

pub use entity_viewmodel::{EntityViewModel, SubmitError};
pub use gallery_viewmodel::{GalleryRow, GalleryViewModel};
pub use collection_viewmodel::CollectionViewModel;
pub use photo_viewmodel::PhotoViewModel;
