//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! reactive session store following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::storage_keys;
use crate::core::{Session, session};
use crate::models::{ConversionResult, FileDescriptor, Theme};
use crate::utils::{dom, storage};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any
/// child component via `use_context::<AppContext>()`. All session
/// mutation is funneled through the methods below: each one applies the
/// pure [`Session`] transition and then the matching persistence step,
/// so views never touch localStorage directly.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which
/// are cheap to copy (they're just pointers to the underlying reactive
/// state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The conversion session (file, output format, result).
    pub session: RwSignal<Session>,
    /// Live browser file handle for the selected file. Arena-local
    /// because `web_sys::File` is not thread-safe; it never leaves the
    /// main thread and is never persisted.
    raw_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    /// UI theme preference.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Create the context, restoring the persisted session subset and
    /// theme preference from localStorage.
    pub fn new() -> Self {
        let theme = storage::get_string(storage_keys::THEME)
            .and_then(|key| Theme::from_key(&key))
            .unwrap_or_default();
        dom::apply_document_theme(theme.key());

        Self {
            session: RwSignal::new(session::restore()),
            raw_file: RwSignal::new_local(None),
            theme: RwSignal::new(theme),
        }
    }

    /// Replace the selected file from a browser file handle; `None`
    /// clears the selection (and, per the session invariant, the chosen
    /// format and result).
    pub fn set_file(&self, file: Option<web_sys::File>) {
        let descriptor = file.as_ref().map(FileDescriptor::from_file);
        session::persist_file(descriptor.as_ref());
        self.session.update(|s| s.set_file(descriptor));
        self.raw_file.set(file);
    }

    pub fn set_output_format(&self, format: Option<String>) {
        session::persist_output_format(format.as_deref());
        self.session.update(|s| s.set_output_format(format));
    }

    pub fn set_result(&self, result: Option<ConversionResult>) {
        session::persist_result(result.as_ref());
        self.session.update(|s| s.set_result(result));
    }

    /// Clear all session state and every persisted entry.
    pub fn reset_all(&self) {
        session::clear_persisted();
        self.session.update(|s| s.reset());
        self.raw_file.set(None);
    }

    /// The live file handle, if this process created the selection.
    pub fn raw_file(&self) -> Option<web_sys::File> {
        self.raw_file.get_untracked()
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        if let Err(e) = storage::set_string(storage_keys::THEME, next.key()) {
            dom::console_error(&format!("failed to persist theme: {e}"));
        }
        dom::apply_document_theme(next.key());
        self.theme.set(next);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e27;
                    color: #e0e0e0;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #151a35;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6c7a89;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #ff6b6b;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #4a90e2;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
