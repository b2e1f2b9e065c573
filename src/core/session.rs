//! Conversion session state.
//!
//! [`Session`] is the single authoritative holder of the in-progress
//! conversion: the selected input file, the chosen output format, and
//! the simulated result. Transitions are pure value updates; mirroring
//! to localStorage is a separate, explicit step so the state logic
//! stays testable off-browser. The reactive store in `app.rs` funnels
//! every mutation through a transition followed by the matching
//! `persist_*` call.

use crate::config::storage_keys;
use crate::models::{ConversionResult, FileDescriptor};
use crate::utils::{dom, storage};

/// The (file, output format, result) tuple for one conversion session.
///
/// Invariant: the output format and result are meaningless without a
/// file, so clearing the file clears both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub file: Option<FileDescriptor>,
    pub output_format: Option<String>,
    pub result: Option<ConversionResult>,
}

impl Session {
    /// Replace the selected file. Clearing it also clears the chosen
    /// format and any result.
    pub fn set_file(&mut self, file: Option<FileDescriptor>) {
        if file.is_none() {
            self.output_format = None;
            self.result = None;
        }
        self.file = file;
    }

    pub fn set_output_format(&mut self, format: Option<String>) {
        self.output_format = format;
    }

    pub fn set_result(&mut self, result: Option<ConversionResult>) {
        self.result = result;
    }

    /// Clear all three fields.
    pub fn reset(&mut self) {
        *self = Session::default();
    }

    /// Whether the session can enter the converting step.
    pub fn ready_to_convert(&self) -> bool {
        self.file.is_some() && self.output_format.is_some()
    }
}

// =============================================================================
// Persistence boundary
// =============================================================================

/// Mirror the file metadata entry; `None` removes it.
pub fn persist_file(file: Option<&FileDescriptor>) {
    let outcome = match file {
        Some(descriptor) => storage::set_json(storage_keys::FILE_METADATA, descriptor),
        None => storage::remove(storage_keys::FILE_METADATA),
    };
    if let Err(e) = outcome {
        dom::console_error(&format!("failed to persist file metadata: {e}"));
    }
}

/// Mirror the output format entry; `None` removes it.
pub fn persist_output_format(format: Option<&str>) {
    let outcome = match format {
        Some(format) => storage::set_string(storage_keys::OUTPUT_FORMAT, format),
        None => storage::remove(storage_keys::OUTPUT_FORMAT),
    };
    if let Err(e) = outcome {
        dom::console_error(&format!("failed to persist output format: {e}"));
    }
}

/// Mirror the result entry; `None` removes it. Only the serializable
/// fileName/fileSize fields survive, never the object URL.
pub fn persist_result(result: Option<&ConversionResult>) {
    let outcome = match result {
        Some(result) => storage::set_json(storage_keys::RESULT, result),
        None => storage::remove(storage_keys::RESULT),
    };
    if let Err(e) = outcome {
        dom::console_error(&format!("failed to persist conversion result: {e}"));
    }
}

/// Remove all three persisted entries.
pub fn clear_persisted() {
    for key in [
        storage_keys::FILE_METADATA,
        storage_keys::OUTPUT_FORMAT,
        storage_keys::RESULT,
    ] {
        if let Err(e) = storage::remove(key) {
            dom::console_error(&format!("failed to clear '{key}': {e}"));
        }
    }
}

/// Rebuild a session from the persisted entries at startup.
///
/// Missing or corrupt entries leave the corresponding field at its
/// default. A restored result never carries a download URL and a
/// restored file never carries a live handle; both are reconstructible
/// only within the process that created them.
pub fn restore() -> Session {
    let mut session = Session::default();
    session.set_file(storage::get_json(storage_keys::FILE_METADATA));
    if session.file.is_some() {
        session.set_output_format(storage::get_string(storage_keys::OUTPUT_FORMAT));
        session.set_result(storage::get_json(storage_keys::RESULT));
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> FileDescriptor {
        FileDescriptor {
            name: name.to_string(),
            size: 2048,
            mime_type: "image/png".to_string(),
            last_modified: 0.0,
        }
    }

    #[test]
    fn test_defaults_to_empty() {
        let session = Session::default();
        assert_eq!(session.file, None);
        assert_eq!(session.output_format, None);
        assert_eq!(session.result, None);
        assert!(!session.ready_to_convert());
    }

    #[test]
    fn test_ready_to_convert() {
        let mut session = Session::default();
        session.set_file(Some(descriptor("photo.png")));
        assert!(!session.ready_to_convert());

        session.set_output_format(Some("webp".to_string()));
        assert!(session.ready_to_convert());
    }

    #[test]
    fn test_clearing_file_clears_dependents() {
        let mut session = Session::default();
        session.set_file(Some(descriptor("photo.png")));
        session.set_output_format(Some("webp".to_string()));
        session.set_result(Some(ConversionResult {
            file_name: "photo.webp".to_string(),
            file_size: 1843,
            download_url: None,
        }));

        session.set_file(None);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_replacing_file_keeps_format() {
        let mut session = Session::default();
        session.set_file(Some(descriptor("a.png")));
        session.set_output_format(Some("webp".to_string()));

        session.set_file(Some(descriptor("b.jpg")));
        assert_eq!(session.output_format.as_deref(), Some("webp"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::default();
        session.set_file(Some(descriptor("photo.png")));
        session.set_output_format(Some("webp".to_string()));
        session.reset();
        assert_eq!(session, Session::default());
    }
}
