// ============================================================================
// DOM MODULE - DOM helpers for the views
// ============================================================================

pub mod element;
pub mod builder;

pub use element::*;
pub use builder::*;
