//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Log an error message to the browser console.
pub fn console_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

/// Log a warning to the browser console.
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix.
/// Useful for redirects that shouldn't appear in back button history.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

/// Go back one entry in browser history.
pub fn history_back() {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.back();
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Apply the theme key as the class on `<html>` so CSS variables switch.
pub fn apply_document_theme(theme_key: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(root) = document.document_element()
    {
        root.set_class_name(theme_key);
    }
}

// =============================================================================
// Downloads
// =============================================================================

/// Trigger a browser download of `url` under `file_name` by clicking a
/// synthesized anchor element.
pub fn trigger_download(url: &str, file_name: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    if let Ok(element) = document.create_element("a")
        && let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>()
    {
        anchor.set_href(url);
        anchor.set_download(file_name);
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}
