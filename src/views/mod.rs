// ============================================================================
// VIEWS - Render slice state into the DOM (no logic)
// ============================================================================

pub mod banner;
pub mod gallery_list;

pub use banner::render_banner;
pub use gallery_list::{handle_list_click, render_gallery_list};
