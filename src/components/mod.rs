//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`home`] - Landing page with category cards
//! - [`select`] - File upload and output format selection
//! - [`convert`] - Simulated conversion progress screen
//! - [`results`] - Conversion results and download
//! - [`settings`] - Theme, language, and quality settings
//! - [`upload`] - Drag & drop file picker widget
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod convert;
pub mod home;
pub mod icons;
pub mod results;
pub mod router;
pub mod select;
pub mod settings;
pub mod upload;

pub use router::AppRouter;
