//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Category`], [`CategoryInfo`] - Static format catalog
//! - [`FileDescriptor`], [`ConversionResult`] - Conversion session data
//! - [`Route`] - Hash-based navigation
//! - [`Theme`] - UI theme preference

mod catalog;
mod file;
mod route;
mod theme;

pub use catalog::{Category, CategoryInfo};
pub use file::{ConversionResult, FileDescriptor, extension_of};
pub use route::Route;
pub use theme::Theme;
