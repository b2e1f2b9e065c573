//! Browser tests for session persistence.
//!
//! localStorage is only available in a browser context, so these run
//! under wasm-bindgen-test only.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use filemorph::config::storage_keys;
use filemorph::core::session::{self, Session};
use filemorph::models::{ConversionResult, FileDescriptor};

wasm_bindgen_test_configure!(run_in_browser);

fn storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("test requires localStorage")
}

fn descriptor() -> FileDescriptor {
    FileDescriptor {
        name: "photo.png".to_string(),
        size: 2048,
        mime_type: "image/png".to_string(),
        last_modified: 1700000000000.0,
    }
}

#[wasm_bindgen_test]
fn persist_and_restore_round_trip() {
    session::clear_persisted();

    session::persist_file(Some(&descriptor()));
    session::persist_output_format(Some("webp"));
    session::persist_result(Some(&ConversionResult {
        file_name: "photo.webp".to_string(),
        file_size: 1843,
        download_url: Some("blob:dies-with-the-page".to_string()),
    }));

    let restored = session::restore();
    assert_eq!(restored.file, Some(descriptor()));
    assert_eq!(restored.output_format.as_deref(), Some("webp"));

    let result = restored.result.expect("result must be restored");
    assert_eq!(result.file_name, "photo.webp");
    assert_eq!(result.file_size, 1843);
    // The object URL never survives persistence.
    assert_eq!(result.download_url, None);

    session::clear_persisted();
}

#[wasm_bindgen_test]
fn clear_persisted_removes_all_entries() {
    session::persist_file(Some(&descriptor()));
    session::persist_output_format(Some("webp"));

    session::clear_persisted();

    let storage = storage();
    for key in [
        storage_keys::FILE_METADATA,
        storage_keys::OUTPUT_FORMAT,
        storage_keys::RESULT,
    ] {
        assert_eq!(storage.get_item(key).unwrap(), None);
    }
    assert_eq!(session::restore(), Session::default());
}

#[wasm_bindgen_test]
fn corrupt_entries_restore_as_defaults() {
    session::clear_persisted();
    let storage = storage();
    storage
        .set_item(storage_keys::FILE_METADATA, "{not json")
        .unwrap();

    let restored = session::restore();
    assert_eq!(restored, Session::default());

    session::clear_persisted();
}

#[wasm_bindgen_test]
fn orphaned_entries_are_ignored_without_a_file() {
    session::clear_persisted();
    // A format persisted without file metadata is meaningless.
    session::persist_output_format(Some("webp"));

    let restored = session::restore();
    assert_eq!(restored.output_format, None);

    session::clear_persisted();
}
