//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar.
pub const APP_NAME: &str = "FileMorph";

/// Application version.
#[allow(dead_code)]
pub const APP_VERSION: &str = "0.1.0";

/// Tagline displayed on the landing page.
pub const APP_TAGLINE: &str = "Anytime. Anywhere.";

// =============================================================================
// Persistence Configuration
// =============================================================================

/// localStorage keys for the persisted session subset.
///
/// Each entry is written and removed independently; there is no schema
/// versioning. The layout must stay stable across releases.
pub mod storage_keys {
    /// Serialized [`FileDescriptor`](crate::models::FileDescriptor) metadata.
    pub const FILE_METADATA: &str = "conversionFileMetadata";
    /// Chosen output format, stored as a bare string.
    pub const OUTPUT_FORMAT: &str = "outputFormat";
    /// Serialized conversion result (fileName/fileSize only).
    pub const RESULT: &str = "conversionResult";
    /// UI theme preference.
    pub const THEME: &str = "theme";
}

// =============================================================================
// Conversion Configuration
// =============================================================================

/// Simulated conversion pacing.
pub mod conversion {
    /// Number of progress steps emitted after the initial 0.
    pub const PROGRESS_STEPS: u8 = 100;

    /// Delay between progress steps in milliseconds. UX pacing only,
    /// not a timing contract.
    pub const STEP_DELAY_MS: u32 = 30;

    /// Factor applied to the input size for the placeholder output size.
    pub const SIZE_SCALE: f64 = 0.9;

    /// Dwell on the completed progress bar before showing results.
    pub const RESULT_DWELL_MS: u32 = 500;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Quality slider bounds and default for the settings page.
pub mod quality {
    pub const MIN: u8 = 30;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 80;
}
