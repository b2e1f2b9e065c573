//! Utility modules for browser and display glue.
//!
//! Provides:
//! - [`dom`] - Window/storage access, hash navigation, downloads
//! - [`storage`] - JSON (de)serialization over localStorage
//! - [`format_file_size`] - Human-readable byte counts

pub mod dom;
mod format;
pub mod storage;

pub use format::format_file_size;
