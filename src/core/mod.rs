//! Core application logic (browser-free where possible).
//!
//! - [`formats`] - Format compatibility resolver
//! - [`session`] - Session state and its persistence boundary
//! - [`convert`] - Simulated conversion runner
//! - [`flow`] - Wizard step validation

pub mod convert;
mod error;
pub mod flow;
pub mod formats;
pub mod session;

pub use error::{ConvertError, StorageError};
pub use session::Session;
