// ============================================================================
// STATE MODULE - Entity slices, shared stores, upload staging
// ============================================================================

pub mod slice;
pub mod store;
pub mod task;
pub mod upload_staging;
pub mod selectors;

pub use slice::{Phase, SliceEvent, SliceState};
pub use store::SliceStore;
pub use task::{TaskHandle, TaskStatus};
pub use upload_staging::{StagingEntry, UploadStaging};
pub use selectors::{DetailView, PhotoFilter};
