pub mod transport;
pub mod api_client;
pub mod preview;
pub mod entity_service;
pub mod gallery_service;
pub mod collection_service;
pub mod photo_service;

pub use transport::{ApiError, Method, MultipartForm, Payload, Transport};
pub use api_client::ApiClient;
pub use preview::{ObjectUrlPreviews, PreviewHandle, PreviewProvider};
pub use entity_service::{Deleted, EntityService, OperationKind, Saved};
pub use gallery_service::GalleryService;
pub use collection_service::CollectionService;
pub use photo_service::PhotoService;
