//! FileMorph: a client-side file conversion wizard.
//!
//! The conversion itself is simulated; the interesting parts are the
//! format catalog, the compatibility resolver, the session store with
//! its localStorage mirror, and the wizard flow that ties the four
//! screens together.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
