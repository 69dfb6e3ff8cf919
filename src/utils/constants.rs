/// Backend base URL
/// Configured at compile time:
/// - Development: http://localhost:4000 (default)
/// - Production: via the BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:4000",
};

/// Multipart field shared by every file of a multi-image upload
pub const IMAGES_FIELD: &str = "images";

/// Multipart field for single-thumbnail uploads (collections)
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// Root element the admin console mounts into
pub const APP_ROOT_ID: &str = "app";
